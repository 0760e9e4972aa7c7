#[path = "../common/mod.rs"]
mod common;

mod diff_staged_against_head;
mod diff_working_against_commit;
