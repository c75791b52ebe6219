//! Staff directory row mapping.
//!
//! The shell stores the directory in a row store (the reference deployment
//! uses a CSV keyed by staff name); this module maps one row's fields to a
//! [`StaffMember`]. Column names follow the reference store:
//!
//! | Column | Field |
//! |--------|-------|
//! | `Nome` | name (required) |
//! | `Ruolo` | role — any value containing "overnante" is a supervisor |
//! | `Zone_Padronanza` | zone affinities, comma-separated |
//! | `Part_Time` | part-time flag |
//! | `Lavora_Bene_Con` | preferred partner (`Nessuna` or empty = none) |
//! | `Indisp_Spezzato` | restricted from evening split |
//! | `Jolly` | floater |
//! | `Pendolare` | commuter |
//! | `Viaggia_Con` | carpool companion (`Nessuna` or empty = none) |
//! | `Professionalita` … `Capacita_Guida` | ratings, default 5 |
//!
//! Flags accept `1`, `true`, `yes`, `sì`/`si`. Missing columns take
//! defaults; unknown columns are ignored. No file I/O lives here — reading
//! the store is the caller's job.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{Role, StaffMember, StaffRatings};

/// One directory row: column name → raw field value.
pub type StaffRow = HashMap<String, String>;

/// Failure to map a directory row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The `Nome` column is missing or blank.
    #[error("directory row has no name (column `Nome`)")]
    MissingName,
}

/// Maps one directory row to a staff member.
pub fn staff_from_row(row: &StaffRow) -> Result<StaffMember, RecordError> {
    let name = field(row, "Nome");
    if name.is_empty() {
        return Err(RecordError::MissingName);
    }

    let role = if field(row, "Ruolo").to_lowercase().contains("overnante") {
        Role::Supervisor
    } else {
        Role::Attendant
    };

    let mut member = match role {
        Role::Supervisor => StaffMember::supervisor(name),
        Role::Attendant => StaffMember::attendant(name),
    };

    member.zone_affinities = field(row, "Zone_Padronanza")
        .split(',')
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .map(str::to_string)
        .collect();

    if flag(row, "Part_Time") {
        member = member.part_time();
    }
    member.preferred_partner = optional_name(row, "Lavora_Bene_Con");
    member.restricted_from_split = flag(row, "Indisp_Spezzato");
    member.floater = flag(row, "Jolly");
    member.commuter = flag(row, "Pendolare");
    member.travels_with = optional_name(row, "Viaggia_Con");
    member.ratings = StaffRatings {
        professionalism: rating(row, "Professionalita"),
        experience: rating(row, "Esperienza"),
        stamina: rating(row, "Tenuta_Fisica"),
        availability: rating(row, "Disponibilita"),
        empathy: rating(row, "Empatia"),
        leadership: rating(row, "Capacita_Guida"),
    };

    Ok(member)
}

/// Maps a batch of rows, skipping nameless ones the way the reference
/// loader does.
pub fn staff_from_rows(rows: &[StaffRow]) -> Vec<StaffMember> {
    rows.iter().filter_map(|row| staff_from_row(row).ok()).collect()
}

fn field<'a>(row: &'a StaffRow, column: &str) -> &'a str {
    row.get(column).map(|v| v.trim()).unwrap_or("")
}

/// Lenient flag parsing over the store's historical spellings.
fn flag(row: &StaffRow, column: &str) -> bool {
    matches!(
        field(row, column).to_lowercase().as_str(),
        "1" | "true" | "yes" | "sì" | "si"
    )
}

/// A name-valued field where empty and the literal `Nessuna` mean none.
fn optional_name(row: &StaffRow, column: &str) -> Option<String> {
    let value = field(row, column);
    if value.is_empty() || value.eq_ignore_ascii_case("nessuna") {
        None
    } else {
        Some(value.to_string())
    }
}

/// A 0–10 rating with the form's default of 5.
fn rating(row: &StaffRow, column: &str) -> u8 {
    field(row, column).parse::<u8>().map(|v| v.min(10)).unwrap_or(5)
}
