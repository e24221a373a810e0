//! Seeded mock snapshot every view starts from.
//!
//! Each call returns a fresh copy; views own their working copies and never
//! share mutable state.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::net::{IpAddr, Ipv4Addr};

use crate::entities::{
    Asset, AuditEntry, Base, Coordinates, Report, Transfer, TransferState, ValueChange,
};
use crate::enums::{
    AssetCategory, AssetStatus, AuditAction, AuditEntity, Condition, Priority, ReportStatus,
    ReportType, Role, Severity,
};
use crate::settings::UserProfile;

/// Calendar date literal for seeded records.
///
/// # Panics
///
/// Panics on an invalid date; only called with constant, valid dates.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("seed timestamps are valid")
}

const fn ip(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(a, b, c, d))
}

#[allow(clippy::too_many_arguments)]
fn asset(
    id: &str,
    name: &str,
    category: AssetCategory,
    status: AssetStatus,
    location: &str,
    assigned_to: Option<&str>,
    condition: Condition,
    maintenance: (NaiveDate, NaiveDate),
    serial_number: &str,
    acquisition_date: NaiveDate,
    value: u64,
) -> Asset {
    Asset {
        id: id.into(),
        name: name.into(),
        category,
        status,
        location: location.into(),
        assigned_to: assigned_to.map(Into::into),
        condition,
        last_maintenance: maintenance.0,
        next_maintenance: maintenance.1,
        serial_number: serial_number.into(),
        acquisition_date,
        value,
    }
}

#[must_use]
pub fn assets() -> Vec<Asset> {
    vec![
        asset(
            "AST-001",
            "M1A2 Abrams Tank",
            AssetCategory::Vehicle,
            AssetStatus::Active,
            "Base Alpha",
            Some("Tank Company A"),
            Condition::Excellent,
            (date(2024, 7, 15), date(2024, 9, 15)),
            "ABR-2024-001",
            date(2023, 3, 10),
            8_500_000,
        ),
        asset(
            "AST-002",
            "UH-60 Blackhawk",
            AssetCategory::Vehicle,
            AssetStatus::Maintenance,
            "Base Bravo",
            Some("Aviation Squadron 1"),
            Condition::Good,
            (date(2024, 8, 1), date(2024, 8, 20)),
            "BLK-2024-002",
            date(2022, 11, 20),
            15_200_000,
        ),
        asset(
            "AST-003",
            "M4A1 Carbine",
            AssetCategory::Weapon,
            AssetStatus::Active,
            "Base Charlie",
            Some("Infantry Regiment 2"),
            Condition::Excellent,
            (date(2024, 6, 10), date(2024, 12, 10)),
            "M4-2024-003",
            date(2023, 1, 5),
            1_500,
        ),
        asset(
            "AST-004",
            "5.56mm NATO Ammunition (1000 rounds)",
            AssetCategory::Ammunition,
            AssetStatus::Active,
            "Base Delta",
            None,
            Condition::Excellent,
            (date(2024, 5, 1), date(2025, 5, 1)),
            "AMM-2024-004",
            date(2024, 2, 15),
            800,
        ),
        asset(
            "AST-005",
            "HMMWV M1151",
            AssetCategory::Vehicle,
            AssetStatus::Reserved,
            "Base Echo",
            Some("Military Police"),
            Condition::Good,
            (date(2024, 7, 20), date(2024, 10, 20)),
            "HMV-2024-005",
            date(2021, 8, 30),
            220_000,
        ),
        asset(
            "AST-006",
            "AN/PRC-152 Radio",
            AssetCategory::Communication,
            AssetStatus::Active,
            "Base Alpha",
            Some("Communications Unit"),
            Condition::Fair,
            (date(2024, 4, 15), date(2024, 8, 15)),
            "RAD-2024-006",
            date(2020, 12, 5),
            4_500,
        ),
    ]
}

#[must_use]
pub fn transfers() -> Vec<Transfer> {
    vec![
        Transfer {
            id: "TRF-001".into(),
            asset_id: "AST-001".into(),
            asset_name: "M1A2 Abrams Tank".into(),
            from_location: "Base Alpha".into(),
            to_location: "Base Bravo".into(),
            requested_by: "Col. Smith".into(),
            state: TransferState::Pending,
            request_date: date(2024, 8, 15),
            expected_date: date(2024, 8, 25),
            reason: "Tactical exercise deployment".into(),
            priority: Priority::High,
        },
        Transfer {
            id: "TRF-002".into(),
            asset_id: "AST-003".into(),
            asset_name: "M4A1 Carbine".into(),
            from_location: "Base Charlie".into(),
            to_location: "Base Delta".into(),
            requested_by: "Maj. Johnson".into(),
            state: TransferState::InTransit {
                approved_by: "Gen. Davis".into(),
            },
            request_date: date(2024, 8, 10),
            expected_date: date(2024, 8, 18),
            reason: "Unit redeployment".into(),
            priority: Priority::Medium,
        },
        Transfer {
            id: "TRF-003".into(),
            asset_id: "AST-005".into(),
            asset_name: "HMMWV M1151".into(),
            from_location: "Base Echo".into(),
            to_location: "Base Alpha".into(),
            requested_by: "Capt. Williams".into(),
            state: TransferState::Completed {
                approved_by: "Col. Brown".into(),
                completed_date: date(2024, 8, 11),
            },
            request_date: date(2024, 8, 5),
            expected_date: date(2024, 8, 12),
            reason: "Patrol mission requirement".into(),
            priority: Priority::Low,
        },
        Transfer {
            id: "TRF-004".into(),
            asset_id: "AST-006".into(),
            asset_name: "AN/PRC-152 Radio".into(),
            from_location: "Base Alpha".into(),
            to_location: "Base Charlie".into(),
            requested_by: "Lt. Martinez".into(),
            state: TransferState::Rejected { approved_by: None },
            request_date: date(2024, 8, 12),
            expected_date: date(2024, 8, 20),
            reason: "Communication upgrade project".into(),
            priority: Priority::Urgent,
        },
    ]
}

fn base(
    id: &str,
    name: &str,
    location: &str,
    commander: &str,
    asset_count: u32,
    (lat, lng): (f64, f64),
) -> Base {
    Base {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        commander: commander.into(),
        asset_count,
        coordinates: Coordinates { lat, lng },
    }
}

#[must_use]
pub fn bases() -> Vec<Base> {
    vec![
        base(
            "BASE-001",
            "Base Alpha",
            "Fort Liberty, NC",
            "Col. Anderson",
            247,
            (35.1495, -79.0092),
        ),
        base(
            "BASE-002",
            "Base Bravo",
            "Fort Campbell, KY",
            "Col. Thompson",
            189,
            (36.6584, -87.4564),
        ),
        base(
            "BASE-003",
            "Base Charlie",
            "Fort Hood, TX",
            "Col. Wilson",
            312,
            (31.1348, -97.7841),
        ),
        base(
            "BASE-004",
            "Base Delta",
            "Fort Carson, CO",
            "Col. Rodriguez",
            156,
            (38.7455, -104.7881),
        ),
        base(
            "BASE-005",
            "Base Echo",
            "Joint Base Lewis-McChord, WA",
            "Col. Davis",
            203,
            (47.0778, -122.5836),
        ),
    ]
}

fn change(old_value: Option<&str>, new_value: Option<&str>) -> Option<ValueChange> {
    Some(ValueChange {
        old_value: old_value.map(Into::into),
        new_value: new_value.map(Into::into),
    })
}

#[must_use]
#[allow(clippy::too_many_lines)]
pub fn audit_entries() -> Vec<AuditEntry> {
    vec![
        AuditEntry {
            id: "AUD-001".into(),
            timestamp: timestamp(2024, 8, 20, 14, 30, 25),
            action: AuditAction::Transfer,
            entity: AuditEntity::Asset,
            entity_id: "AST-001".into(),
            entity_name: "M1A2 Abrams Tank".into(),
            user: "Commander Smith".into(),
            user_role: Some(Role::Commander),
            location: "Base Alpha".into(),
            ip_address: ip(192, 168, 1, 101),
            details: "Asset transfer approved from Base Alpha to Base Bravo".into(),
            change: change(Some("Base Alpha"), Some("Base Bravo")),
            severity: Severity::Medium,
            success: true,
        },
        AuditEntry {
            id: "AUD-002".into(),
            timestamp: timestamp(2024, 8, 20, 14, 15, 42),
            action: AuditAction::Update,
            entity: AuditEntity::Asset,
            entity_id: "AST-002".into(),
            entity_name: "UH-60 Blackhawk".into(),
            user: "Tech Sergeant Johnson".into(),
            user_role: Some(Role::Logistics),
            location: "Base Bravo".into(),
            ip_address: ip(192, 168, 1, 102),
            details: "Asset status changed from active to maintenance".into(),
            change: change(Some("active"), Some("maintenance")),
            severity: Severity::Low,
            success: true,
        },
        AuditEntry {
            id: "AUD-003".into(),
            timestamp: timestamp(2024, 8, 20, 13, 45, 17),
            action: AuditAction::Login,
            entity: AuditEntity::System,
            entity_id: "SYS-LOGIN".into(),
            entity_name: "System Login".into(),
            user: "Admin Williams".into(),
            user_role: Some(Role::Admin),
            location: "Base Charlie".into(),
            ip_address: ip(192, 168, 1, 103),
            details: "Administrator login successful".into(),
            change: None,
            severity: Severity::Low,
            success: true,
        },
        AuditEntry {
            id: "AUD-004".into(),
            timestamp: timestamp(2024, 8, 20, 13, 30, 8),
            action: AuditAction::Delete,
            entity: AuditEntity::User,
            entity_id: "USR-045".into(),
            entity_name: "Corporal Davis".into(),
            user: "Admin Williams".into(),
            user_role: Some(Role::Admin),
            location: "Base Charlie".into(),
            ip_address: ip(192, 168, 1, 103),
            details: "User account deactivated due to transfer".into(),
            change: None,
            severity: Severity::Medium,
            success: true,
        },
        AuditEntry {
            id: "AUD-005".into(),
            timestamp: timestamp(2024, 8, 20, 12, 15, 33),
            action: AuditAction::Create,
            entity: AuditEntity::Asset,
            entity_id: "AST-156".into(),
            entity_name: "HMMWV M1151".into(),
            user: "Logistics Officer Brown".into(),
            user_role: Some(Role::Logistics),
            location: "Base Delta".into(),
            ip_address: ip(192, 168, 1, 104),
            details: "New asset registered in system".into(),
            change: change(None, Some("active")),
            severity: Severity::Low,
            success: true,
        },
        AuditEntry {
            id: "AUD-006".into(),
            timestamp: timestamp(2024, 8, 20, 11, 45, 22),
            action: AuditAction::Login,
            entity: AuditEntity::System,
            entity_id: "SYS-LOGIN".into(),
            entity_name: "System Login".into(),
            user: "Unknown User".into(),
            user_role: None,
            location: "External".into(),
            ip_address: ip(203, 45, 67, 89),
            details: "Failed login attempt - invalid credentials".into(),
            change: None,
            severity: Severity::High,
            success: false,
        },
        AuditEntry {
            id: "AUD-007".into(),
            timestamp: timestamp(2024, 8, 20, 10, 30, 15),
            action: AuditAction::View,
            entity: AuditEntity::Report,
            entity_id: "RPT-001".into(),
            entity_name: "Asset Inventory Report".into(),
            user: "Captain Martinez".into(),
            user_role: Some(Role::Commander),
            location: "Base Alpha".into(),
            ip_address: ip(192, 168, 1, 105),
            details: "Classified report accessed".into(),
            change: None,
            severity: Severity::Medium,
            success: true,
        },
        AuditEntry {
            id: "AUD-008".into(),
            timestamp: timestamp(2024, 8, 20, 9, 15, 44),
            action: AuditAction::Update,
            entity: AuditEntity::System,
            entity_id: "SYS-CONFIG".into(),
            entity_name: "System Configuration".into(),
            user: "Admin Williams".into(),
            user_role: Some(Role::Admin),
            location: "Base Charlie".into(),
            ip_address: ip(192, 168, 1, 103),
            details: "Security settings updated".into(),
            change: change(Some("Medium"), Some("High")),
            severity: Severity::Critical,
            success: true,
        },
    ]
}

fn report(
    id: &str,
    report_type: ReportType,
    description: &str,
    last_generated: NaiveDate,
    generated_by: &str,
    status: ReportStatus,
    size_bytes: Option<u64>,
) -> Report {
    Report {
        id: id.into(),
        name: report_type.title().into(),
        report_type,
        description: description.into(),
        last_generated,
        generated_by: generated_by.into(),
        status,
        size_bytes,
    }
}

#[must_use]
pub fn reports() -> Vec<Report> {
    vec![
        report(
            "RPT-001",
            ReportType::Asset,
            "Complete inventory of all military assets with status and locations",
            date(2024, 8, 19),
            "System Admin",
            ReportStatus::Ready,
            Some(2_400_000),
        ),
        report(
            "RPT-002",
            ReportType::Transfer,
            "Detailed analysis of asset transfers between bases",
            date(2024, 8, 18),
            "Logistics Commander",
            ReportStatus::Ready,
            Some(1_800_000),
        ),
        report(
            "RPT-003",
            ReportType::Maintenance,
            "Upcoming and overdue maintenance activities",
            date(2024, 8, 17),
            "Maintenance Chief",
            ReportStatus::Ready,
            Some(3_200_000),
        ),
        report(
            "RPT-004",
            ReportType::Financial,
            "Asset valuation and cost analysis summary",
            date(2024, 8, 16),
            "Finance Officer",
            ReportStatus::Ready,
            Some(1_100_000),
        ),
        report(
            "RPT-005",
            ReportType::Security,
            "Security compliance and access control analysis",
            date(2024, 8, 15),
            "Security Officer",
            ReportStatus::Generating,
            None,
        ),
    ]
}

/// Profile shown on the settings page.
pub fn user_profile() -> UserProfile {
    UserProfile {
        username: "admin".into(),
        full_name: "System Administrator".into(),
        email: "admin@military.gov".into(),
        phone: "+1-555-0123".into(),
        role: Role::Admin,
        last_login: timestamp(2024, 8, 20, 14, 30, 0),
    }
}
