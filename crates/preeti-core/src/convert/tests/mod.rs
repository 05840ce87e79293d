mod forward;

use super::*;

/// Default tables, shared by every test in this module.
fn tables() -> &'static PreetiTables {
    PreetiTables::global()
}

/// A small table with one alternate key, used where the default data would
/// obscure what a test checks.
fn tiny_tables() -> PreetiTables {
    PreetiTables::from_toml(
        r#"
[forward]
k = "प"
K = "प"
l = "ि"
f = "ा"

[reverse_overrides]
"प" = "k"

[[reorder]]
trigger = "l"
matra = "ि"
"#,
    )
    .unwrap()
}
