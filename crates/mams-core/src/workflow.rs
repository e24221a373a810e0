//! Transfer workflow state machine.
//!
//! A [`TransferBoard`] owns one view's working copy of the transfer list and is
//! the only way to move a transfer through its lifecycle:
//!
//! ```text
//! pending ──approve──▶ approved ──advance──▶ in-transit ──advance──▶ completed
//!    └─────reject────▶ rejected
//! ```
//!
//! Records are held as `Arc<Transfer>` and replaced whole on every transition,
//! so entries a transition does not touch keep their identity.

use std::sync::Arc;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Session, Transfer, TransferState};
use crate::enums::{Priority, Role, TransferStatus};
use crate::errors::CoreError;
use crate::filter::{self, TransferFilter};
use crate::ids::{self, PREFIX_TRANSFER};

const ENTITY: &str = "transfer";

/// Who may approve, reject, or advance a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalPolicy {
    /// Any authenticated session.
    #[default]
    Open,
    /// Admins and commanders only.
    CommandStaff,
}

impl ApprovalPolicy {
    #[must_use]
    pub const fn permits(self, role: Role) -> bool {
        match self {
            Self::Open => true,
            Self::CommandStaff => match role {
                Role::Admin | Role::Commander => true,
                Role::Logistics => false,
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::CommandStaff => "command-staff",
        }
    }
}

/// Fields supplied when raising a new transfer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewTransfer {
    pub asset_id: String,
    pub asset_name: String,
    pub from_location: String,
    pub to_location: String,
    pub request_date: NaiveDate,
    pub expected_date: NaiveDate,
    pub reason: String,
    pub priority: Priority,
}

/// One view's transfer list plus the policy gating its transitions.
#[derive(Debug, Clone, Default)]
pub struct TransferBoard {
    transfers: Vec<Arc<Transfer>>,
    policy: ApprovalPolicy,
}

impl TransferBoard {
    #[must_use]
    pub fn new(transfers: Vec<Transfer>, policy: ApprovalPolicy) -> Self {
        Self {
            transfers: transfers.into_iter().map(Arc::new).collect(),
            policy,
        }
    }

    #[must_use]
    pub fn transfers(&self) -> &[Arc<Transfer>] {
        &self.transfers
    }

    #[must_use]
    pub const fn policy(&self) -> ApprovalPolicy {
        self.policy
    }

    /// Look up a transfer by id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no transfer has this id.
    pub fn get(&self, id: &str) -> Result<&Arc<Transfer>, CoreError> {
        self.transfers
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))
    }

    /// Transfers passing `predicate`, in board order.
    #[must_use]
    pub fn filtered(&self, predicate: &TransferFilter) -> Vec<Arc<Transfer>> {
        filter::filter(&self.transfers, predicate)
    }

    /// Approve a pending transfer, recording the actor as approver.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Forbidden` if the policy excludes the
    /// actor's role, `InvalidTransition` unless the transfer is pending. The
    /// record is left untouched on every error.
    pub fn approve(&mut self, id: &str, actor: &Session) -> Result<Arc<Transfer>, CoreError> {
        self.transition(id, actor, "approve transfers", |_| {
            Ok(TransferState::Approved {
                approved_by: actor.user_name.clone(),
            })
        })
    }

    /// Reject a pending transfer.
    ///
    /// # Errors
    ///
    /// Same as [`approve`](Self::approve).
    pub fn reject(&mut self, id: &str, actor: &Session) -> Result<Arc<Transfer>, CoreError> {
        self.transition(id, actor, "reject transfers", |_| {
            Ok(TransferState::Rejected { approved_by: None })
        })
    }

    /// Move a transfer to its single next stage: approved to in-transit, or
    /// in-transit to completed on `on`.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` from pending (which awaits a decision) and from
    /// terminal states, `Validation` if `on` precedes the request date;
    /// otherwise as [`approve`](Self::approve).
    pub fn advance(
        &mut self,
        id: &str,
        actor: &Session,
        on: NaiveDate,
    ) -> Result<Arc<Transfer>, CoreError> {
        self.transition(id, actor, "advance transfers", |current| {
            let from = current.status();
            let [next] = from.allowed_next_states() else {
                return Err(CoreError::InvalidTransition {
                    entity_type: ENTITY.into(),
                    id: id.into(),
                    from: from.to_string(),
                    to: "next stage".into(),
                });
            };
            let approved_by = current
                .approved_by()
                .unwrap_or(actor.user_name.as_str())
                .to_string();
            match next {
                TransferStatus::InTransit => Ok(TransferState::InTransit { approved_by }),
                TransferStatus::Completed if on < current.request_date => {
                    Err(CoreError::Validation(format!(
                        "completion date {on} precedes request date {}",
                        current.request_date
                    )))
                }
                TransferStatus::Completed => Ok(TransferState::Completed {
                    approved_by,
                    completed_date: on,
                }),
                other => Err(illegal(id, from, *other)),
            }
        })
    }

    /// Raise a new transfer request in `pending` under the next free id.
    ///
    /// # Errors
    ///
    /// `Validation` if source and destination match, the expected date
    /// precedes the request date, or a required text field is blank.
    pub fn request(
        &mut self,
        request: NewTransfer,
        requester: &Session,
    ) -> Result<Arc<Transfer>, CoreError> {
        validate_request(&request)?;

        let id = ids::next_id(PREFIX_TRANSFER, self.transfers.iter().map(|t| t.id.as_str()));
        let transfer = Arc::new(Transfer {
            id,
            asset_id: request.asset_id,
            asset_name: request.asset_name,
            from_location: request.from_location,
            to_location: request.to_location,
            requested_by: requester.user_name.clone(),
            state: TransferState::Pending,
            request_date: request.request_date,
            expected_date: request.expected_date,
            reason: request.reason,
            priority: request.priority,
        });
        tracing::info!(id = %transfer.id, requester = %requester.user_name, "transfer requested");
        self.transfers.push(Arc::clone(&transfer));
        Ok(transfer)
    }

    /// Apply `next` to one transfer, refusing any target state the status
    /// table does not allow from its current status.
    fn transition<F>(
        &mut self,
        id: &str,
        actor: &Session,
        operation: &str,
        next: F,
    ) -> Result<Arc<Transfer>, CoreError>
    where
        F: FnOnce(&Transfer) -> Result<TransferState, CoreError>,
    {
        let index = self
            .transfers
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

        if !self.policy.permits(actor.role) {
            return Err(CoreError::Forbidden {
                role: actor.role,
                operation: operation.to_string(),
            });
        }

        let current: &Transfer = &self.transfers[index];
        let from = current.status();
        let state = next(current)?;
        let to = state.status();
        if !from.can_transition_to(to) {
            return Err(illegal(id, from, to));
        }

        let updated = Arc::new(Transfer {
            state,
            ..Transfer::clone(current)
        });
        tracing::info!(
            id,
            %from,
            %to,
            actor = %actor.user_name,
            "transfer transitioned"
        );
        self.transfers[index] = Arc::clone(&updated);
        Ok(updated)
    }
}

fn illegal(id: &str, from: TransferStatus, to: TransferStatus) -> CoreError {
    CoreError::InvalidTransition {
        entity_type: ENTITY.into(),
        id: id.into(),
        from: from.to_string(),
        to: to.to_string(),
    }
}

fn validate_request(request: &NewTransfer) -> Result<(), CoreError> {
    for (field, value) in [
        ("asset_id", &request.asset_id),
        ("asset_name", &request.asset_name),
        ("from_location", &request.from_location),
        ("to_location", &request.to_location),
        ("reason", &request.reason),
    ] {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!("{field} must not be empty")));
        }
    }
    if request.from_location == request.to_location {
        return Err(CoreError::Validation(
            "source and destination must differ".into(),
        ));
    }
    if request.expected_date < request.request_date {
        return Err(CoreError::Validation(
            "expected date precedes request date".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::filter::Selector;
    use crate::seed;

    fn board() -> TransferBoard {
        TransferBoard::new(seed::transfers(), ApprovalPolicy::Open)
    }

    fn lee() -> Session {
        Session::new(Role::Commander, "Capt. Lee")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn approve_pending_records_approver() {
        let mut board = board();
        let updated = board.approve("TRF-001", &lee()).unwrap();
        assert_eq!(updated.status(), TransferStatus::Approved);
        assert_eq!(updated.approved_by(), Some("Capt. Lee"));
        assert_eq!(board.get("TRF-001").unwrap().approved_by(), Some("Capt. Lee"));
    }

    #[test]
    fn approve_touches_only_the_target() {
        let mut board = board();
        let before: Vec<Arc<Transfer>> = board.transfers().to_vec();

        board.approve("TRF-001", &lee()).unwrap();

        let after = board.transfers();
        assert!(!Arc::ptr_eq(&before[0], &after[0]));
        for (old, new) in before.iter().zip(after).skip(1) {
            assert!(Arc::ptr_eq(old, new), "{} was replaced", old.id);
        }
        let ids: Vec<_> = after.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["TRF-001", "TRF-002", "TRF-003", "TRF-004"]);
    }

    #[test]
    fn reapprove_is_refused_and_changes_nothing() {
        let mut board = board();
        board.approve("TRF-001", &lee()).unwrap();
        let snapshot = Arc::clone(board.get("TRF-001").unwrap());

        let other = Session::new(Role::Admin, "Gen. Davis");
        let err = board.approve("TRF-001", &other).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));

        let current = board.get("TRF-001").unwrap();
        assert!(Arc::ptr_eq(&snapshot, current));
        assert_eq!(current.approved_by(), Some("Capt. Lee"));
    }

    #[test]
    fn reject_pending_leaves_others_identical() {
        let mut board = board();
        let before: Vec<Arc<Transfer>> = board.transfers().to_vec();

        let updated = board.reject("TRF-001", &lee()).unwrap();
        assert_eq!(updated.status(), TransferStatus::Rejected);
        assert_eq!(updated.approved_by(), None);

        for (old, new) in before.iter().zip(board.transfers()).skip(1) {
            assert!(Arc::ptr_eq(old, new));
        }
    }

    #[test]
    fn terminal_states_refuse_every_operation() {
        let mut board = board();
        for id in ["TRF-003", "TRF-004"] {
            assert!(board.approve(id, &lee()).is_err());
            assert!(board.reject(id, &lee()).is_err());
            assert!(board.advance(id, &lee(), date(2024, 9, 1)).is_err());
        }
        assert_eq!(board.get("TRF-003").unwrap().status(), TransferStatus::Completed);
        assert_eq!(board.get("TRF-004").unwrap().status(), TransferStatus::Rejected);
    }

    #[test]
    fn advance_walks_approved_to_completed() {
        let mut board = board();
        board.approve("TRF-001", &lee()).unwrap();

        let moving = board.advance("TRF-001", &lee(), date(2024, 8, 20)).unwrap();
        assert_eq!(moving.status(), TransferStatus::InTransit);
        assert_eq!(moving.approved_by(), Some("Capt. Lee"));

        let done = board.advance("TRF-001", &lee(), date(2024, 8, 24)).unwrap();
        assert_eq!(done.status(), TransferStatus::Completed);
        assert_eq!(done.completed_date(), Some(date(2024, 8, 24)));
    }

    #[test]
    fn advance_from_pending_is_invalid() {
        let mut board = board();
        let err = board
            .advance("TRF-001", &lee(), date(2024, 8, 20))
            .unwrap_err();
        assert!(err.to_string().contains("from pending"), "got {err}");
        assert_eq!(board.get("TRF-001").unwrap().status(), TransferStatus::Pending);
    }

    #[test]
    fn completion_before_request_date_is_refused() {
        let mut board = board();
        // TRF-002 is in transit, requested 2024-08-10.
        let err = board
            .advance("TRF-002", &lee(), date(2024, 8, 9))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)), "got {err}");
        assert_eq!(board.get("TRF-002").unwrap().status(), TransferStatus::InTransit);

        let done = board.advance("TRF-002", &lee(), date(2024, 8, 10)).unwrap();
        assert_eq!(done.completed_date(), Some(date(2024, 8, 10)));
    }

    /// Every status a seeded transfer can reach through the board's
    /// operations is one the status table lists, and nothing else.
    #[test]
    fn board_moves_match_status_table() {
        let on = date(2024, 12, 31);
        let ops: [(&str, fn(&mut TransferBoard, &Session, NaiveDate, &str) -> bool); 3] = [
            ("approve", |b, s, _, id| b.approve(id, s).is_ok()),
            ("reject", |b, s, _, id| b.reject(id, s).is_ok()),
            ("advance", |b, s, on, id| b.advance(id, s, on).is_ok()),
        ];

        // Walk each seeded transfer forward too, so every status is visited.
        let mut fixtures = board();
        fixtures.approve("TRF-001", &lee()).unwrap();
        let mut visited = vec![TransferStatus::Pending];
        for transfer in fixtures.transfers().iter().chain(board().transfers()) {
            let from = transfer.status();
            let mut reached = Vec::new();
            for (name, op) in ops {
                let mut scratch = TransferBoard::new(
                    vec![Transfer::clone(transfer)],
                    ApprovalPolicy::Open,
                );
                if op(&mut scratch, &lee(), on, &transfer.id) {
                    let to = scratch.get(&transfer.id).unwrap().status();
                    assert!(
                        from.can_transition_to(to),
                        "{name} moved {} from {from} to {to}",
                        transfer.id
                    );
                    reached.push(to);
                }
            }
            reached.sort();
            reached.dedup();
            let mut allowed = from.allowed_next_states().to_vec();
            allowed.sort();
            assert_eq!(reached, allowed, "reachable from {from}");
            visited.push(from);
        }
        visited.sort();
        visited.dedup();
        assert_eq!(visited, TransferStatus::ALL.to_vec());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut board = board();
        let err = board.approve("TRF-999", &lee()).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn command_staff_policy_excludes_logistics() {
        let mut board = TransferBoard::new(seed::transfers(), ApprovalPolicy::CommandStaff);
        let clerk = Session::new(Role::Logistics, "Sgt. Ortiz");
        let err = board.approve("TRF-001", &clerk).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Forbidden {
                role: Role::Logistics,
                ..
            }
        ));
        assert_eq!(board.get("TRF-001").unwrap().status(), TransferStatus::Pending);

        board.approve("TRF-001", &lee()).unwrap();
    }

    #[test]
    fn open_policy_lets_logistics_approve() {
        let mut board = board();
        let clerk = Session::new(Role::Logistics, "Sgt. Ortiz");
        assert!(board.approve("TRF-001", &clerk).is_ok());
    }

    #[test]
    fn transitions_reflow_through_filter() {
        let mut board = board();
        let pending = TransferFilter {
            status: Selector::Only(TransferStatus::Pending),
            ..TransferFilter::default()
        };
        assert_eq!(board.filtered(&pending).len(), 1);
        board.approve("TRF-001", &lee()).unwrap();
        assert!(board.filtered(&pending).is_empty());
    }

    fn new_transfer() -> NewTransfer {
        NewTransfer {
            asset_id: "AST-002".into(),
            asset_name: "UH-60 Blackhawk".into(),
            from_location: "Base Bravo".into(),
            to_location: "Base Echo".into(),
            request_date: date(2024, 8, 21),
            expected_date: date(2024, 8, 30),
            reason: "Medevac coverage".into(),
            priority: Priority::Urgent,
        }
    }

    #[test]
    fn request_creates_pending_with_next_id() {
        let mut board = board();
        let created = board.request(new_transfer(), &lee()).unwrap();
        assert_eq!(created.id, "TRF-005");
        assert_eq!(created.status(), TransferStatus::Pending);
        assert_eq!(created.requested_by, "Capt. Lee");
        assert_eq!(board.transfers().len(), 5);
    }

    #[test]
    fn request_validates_route_and_dates() {
        let mut board = board();

        let same_route = NewTransfer {
            to_location: "Base Bravo".into(),
            ..new_transfer()
        };
        assert!(board.request(same_route, &lee()).is_err());

        let backwards = NewTransfer {
            expected_date: date(2024, 8, 1),
            ..new_transfer()
        };
        assert!(board.request(backwards, &lee()).is_err());

        let unnamed = NewTransfer {
            asset_name: "   ".into(),
            ..new_transfer()
        };
        let err = board.request(unnamed, &lee()).unwrap_err();
        assert!(err.to_string().contains("asset_name"), "got {err}");
        assert_eq!(board.transfers().len(), 4);
    }
}
