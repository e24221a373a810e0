use chrono::NaiveDate;
use mams_core::entities::{Session, Transfer};
use mams_core::responses::TransferActionResponse;
use mams_core::workflow::TransferBoard;

#[derive(Clone, Copy, Debug)]
pub enum Action {
    Approve,
    Reject,
    Advance { on: NaiveDate },
}

/// Apply one workflow action and report the status it moved from.
pub fn apply(
    board: &mut TransferBoard,
    id: &str,
    action: Action,
    actor: &Session,
) -> anyhow::Result<TransferActionResponse> {
    let previous_status = board.get(id)?.status();
    let updated = match action {
        Action::Approve => board.approve(id, actor)?,
        Action::Reject => board.reject(id, actor)?,
        Action::Advance { on } => board.advance(id, actor, on)?,
    };
    Ok(TransferActionResponse {
        previous_status,
        transfer: Transfer::clone(&updated),
    })
}

#[cfg(test)]
mod tests {
    use mams_core::enums::{Role, TransferStatus};
    use mams_core::seed;
    use mams_core::workflow::ApprovalPolicy;
    use pretty_assertions::assert_eq;

    use super::*;

    fn board(policy: ApprovalPolicy) -> TransferBoard {
        TransferBoard::new(seed::transfers(), policy)
    }

    #[test]
    fn approve_reports_previous_status() {
        let mut board = board(ApprovalPolicy::Open);
        let lee = Session::new(Role::Commander, "Capt. Lee");
        let response = apply(&mut board, "TRF-001", Action::Approve, &lee).unwrap();
        assert_eq!(response.previous_status, TransferStatus::Pending);
        assert_eq!(response.transfer.status(), TransferStatus::Approved);
        assert_eq!(response.transfer.approved_by(), Some("Capt. Lee"));
    }

    #[test]
    fn rejecting_a_completed_transfer_is_refused() {
        let mut board = board(ApprovalPolicy::Open);
        let admin = Session::new(Role::Admin, "admin");
        let err = apply(&mut board, "TRF-003", Action::Reject, &admin).unwrap_err();
        assert!(err.to_string().contains("Invalid state transition"));
        assert_eq!(
            board.get("TRF-003").unwrap().status(),
            TransferStatus::Completed
        );
    }

    #[test]
    fn advance_completes_in_transit_transfer() {
        let mut board = board(ApprovalPolicy::Open);
        let on = NaiveDate::from_ymd_opt(2024, 8, 19).unwrap();
        let actor = Session::new(Role::Logistics, "logistics");
        let response = apply(&mut board, "TRF-002", Action::Advance { on }, &actor).unwrap();
        assert_eq!(response.previous_status, TransferStatus::InTransit);
        assert_eq!(response.transfer.status(), TransferStatus::Completed);
    }

    #[test]
    fn command_staff_policy_blocks_logistics() {
        let mut board = board(ApprovalPolicy::CommandStaff);
        let actor = Session::new(Role::Logistics, "logistics");
        let err = apply(&mut board, "TRF-001", Action::Approve, &actor).unwrap_err();
        assert!(err.to_string().contains("may not approve transfers"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut board = board(ApprovalPolicy::Open);
        let actor = Session::new(Role::Admin, "admin");
        let err = apply(&mut board, "TRF-999", Action::Approve, &actor).unwrap_err();
        assert!(err.to_string().contains("Entity not found: transfer TRF-999"));
    }
}
