use crate::commands::{CmdMessage, CmdResult};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::params::{PageOptions, SortOrder};
use crate::request::{Endpoint, SearchRequest};

use super::helpers::{build_session, SessionSpec};

/// Per-call overrides of the configured page window.
#[derive(Debug, Clone, Default)]
pub struct PageOverrides {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

pub fn page_options(config: &SearchConfig, overrides: &PageOverrides) -> PageOptions {
    let defaults = PageOptions::default();
    PageOptions {
        page: overrides.page.unwrap_or(defaults.page),
        limit: overrides.limit.unwrap_or(config.page_size),
        sort: overrides
            .sort
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| config.sort.clone()),
        order: overrides.order.unwrap_or(config.order),
    }
}

pub fn run(
    config: &SearchConfig,
    spec: &SessionSpec,
    overrides: &PageOverrides,
) -> Result<CmdResult> {
    let session = build_session(spec)?;
    let page = page_options(config, overrides);
    let params = session.list_params(&page);

    let request = SearchRequest::new(
        &config.base_url()?,
        session.entity(),
        Endpoint::List,
        params,
        config.timeout(),
    )?;

    let mut result = CmdResult::default();
    if request.params.len() == 4 {
        result.add_message(CmdMessage::info(
            "No filters set; the request lists every record.",
        ));
    }
    Ok(result.with_request(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntityKind;

    #[test]
    fn overrides_beat_config_defaults() {
        let mut config = SearchConfig::default();
        config.set("page-size", "20").unwrap();
        config.set("order", "desc").unwrap();

        let page = page_options(
            &config,
            &PageOverrides {
                page: Some(4),
                sort: Some("titre".into()),
                ..Default::default()
            },
        );

        assert_eq!(page.page, 4);
        assert_eq!(page.limit, 20);
        assert_eq!(page.sort, "titre");
        assert_eq!(page.order, SortOrder::Desc);
    }

    #[test]
    fn builds_list_request() {
        let mut spec = SessionSpec::new(EntityKind::Ouvrage);
        spec.fixed.push("anneeParution=1999".parse().unwrap());
        spec.rows.push("langue=fr".parse().unwrap());

        let result = run(&SearchConfig::default(), &spec, &PageOverrides::default()).unwrap();
        let request = result.request.unwrap();

        assert_eq!(request.url.path(), "/bolero/ouvrages");
        assert_eq!(request.params.get("annee_parution"), Some("1999"));
        assert_eq!(request.params.get("langue"), Some("fr"));
        assert_eq!(request.params.get("limit"), Some("100"));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unfiltered_request_is_flagged() {
        let spec = SessionSpec::new(EntityKind::Recension);
        let result = run(&SearchConfig::default(), &spec, &PageOverrides::default()).unwrap();
        assert_eq!(result.messages.len(), 1);
    }
}
