use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::{build_session, SessionSpec};

/// Fields selectable by row `row`, or by the last row when `row` is `None`.
pub fn run(spec: &SessionSpec, row: Option<usize>) -> Result<CmdResult> {
    let session = build_session(spec)?;
    let index = row.unwrap_or_else(|| session.rows().len().saturating_sub(1));

    let choices = session.available_choices(index);
    let mut result = CmdResult::default()
        .with_catalog(session.catalog())
        .with_choices(choices);

    if session.rows().get(index).is_none() {
        result.add_message(CmdMessage::info(format!(
            "Row {} does not exist yet; showing choices for a new row.",
            index
        )));
    }
    if result.choices.is_empty() {
        result.add_message(CmdMessage::warning("Every field is already in use."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntityKind;

    fn keys(result: &CmdResult) -> Vec<&'static str> {
        result.choices.iter().map(|f| f.key).collect()
    }

    #[test]
    fn last_row_is_the_default() {
        let mut spec = SessionSpec::new(EntityKind::Auteur);
        spec.rows.push("id_ref=123".parse().unwrap());
        spec.blank_rows = 1;

        let result = run(&spec, None).unwrap();
        assert_eq!(keys(&result), vec!["id", "id_proprio"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn explicit_row_sees_its_own_key() {
        let mut spec = SessionSpec::new(EntityKind::Auteur);
        spec.rows.push("id_ref=123".parse().unwrap());
        spec.blank_rows = 1;

        let result = run(&spec, Some(0)).unwrap();
        assert_eq!(keys(&result), vec!["id", "id_ref", "id_proprio"]);
    }

    #[test]
    fn exhausted_catalog_warns() {
        let mut spec = SessionSpec::new(EntityKind::Auteur);
        for row in ["id=1", "id_ref=2", "id_proprio=3"] {
            spec.rows.push(row.parse().unwrap());
        }

        let result = run(&spec, Some(3)).unwrap();
        assert!(result.choices.is_empty());
        assert_eq!(result.messages.len(), 2);
    }
}
