use crate::catalog::EntityKind;
use crate::commands::CmdResult;

pub fn run(entity: EntityKind) -> CmdResult {
    CmdResult::default().with_catalog(entity.catalog())
}
