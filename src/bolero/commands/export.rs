use crate::commands::{CmdMessage, CmdResult};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::request::{Endpoint, SearchRequest};
use chrono::NaiveDate;

use super::helpers::{build_session, SessionSpec};

pub fn run(config: &SearchConfig, spec: &SessionSpec, today: NaiveDate) -> Result<CmdResult> {
    let session = build_session(spec)?;
    let params = session.export_params();

    let request = SearchRequest::new(
        &config.base_url()?,
        session.entity(),
        Endpoint::Export,
        params,
        config.timeout(),
    )?;

    let mut result = CmdResult::default();
    if request.params.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No filters set; the export contains every {}.",
            session.entity()
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "Save as {}",
        request.export_filename(today)
    )));
    Ok(result.with_request(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntityKind;
    use crate::commands::MessageLevel;
    use crate::request::ResponseMode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    #[test]
    fn export_request_carries_filters_only() {
        let mut spec = SessionSpec::new(EntityKind::Ouvrage);
        spec.fixed.push("titre=Paris".parse().unwrap());

        let result = run(&SearchConfig::default(), &spec, today()).unwrap();
        let request = result.request.unwrap();

        assert_eq!(request.url.path(), "/bolero/ouvrages/export");
        assert_eq!(request.response, ResponseMode::Binary);
        assert_eq!(request.params.len(), 1);
        assert!(!request.params.contains_key("page"));
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("ouvrages-export-2024-01-31.csv"));
    }

    #[test]
    fn unfiltered_export_warns() {
        let spec = SessionSpec::new(EntityKind::Auteur);
        let result = run(&SearchConfig::default(), &spec, today()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
