// Template catalog and document merge.
// Placeholder values come from the author profile only, never from parsed
// résumé data.

pub mod catalog;
pub mod merge;
