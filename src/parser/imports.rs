use std::sync::OnceLock;

use tree_sitter::{Node, Query, QueryCursor, StreamingIterator, Tree};

use super::ImportStmt;
use super::languages::Grammar;

/// Tree-sitter query for ESM static imports.
/// Matches `import { X } from 'module'`, `import X from 'module'`,
/// `import * as X from 'module'`, and bare `import 'module'`.
///
/// Only static import declarations are extracted — `require(...)` and dynamic
/// `import(...)` are computed imports and out of scope for the graph.
const ESM_IMPORT_QUERY: &str = r#"
    (import_statement
      source: (string (string_fragment) @specifier))
"#;

// One compiled query per grammar — a query is only valid against the
// grammar it was compiled for, so TS/TSX/JS each get their own cache.
static QUERY_TS: OnceLock<Query> = OnceLock::new();
static QUERY_TSX: OnceLock<Query> = OnceLock::new();
static QUERY_JS: OnceLock<Query> = OnceLock::new();

fn esm_query(grammar: Grammar) -> &'static Query {
    let cell = match grammar {
        Grammar::TypeScript => &QUERY_TS,
        Grammar::Tsx => &QUERY_TSX,
        Grammar::JavaScript => &QUERY_JS,
        Grammar::Python => unreachable!("ESM query requested for Python grammar"),
    };
    cell.get_or_init(|| {
        Query::new(&grammar.language(), ESM_IMPORT_QUERY).expect("invalid ESM import query")
    })
}

fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Extract every static ESM import specifier from a parsed JS/TS syntax tree.
pub fn extract_esm_imports(tree: &Tree, source: &[u8], grammar: Grammar) -> Vec<ImportStmt> {
    let query = esm_query(grammar);
    let specifier_idx = query
        .capture_index_for_name("specifier")
        .expect("ESM import query must have @specifier");

    let mut imports = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, tree.root_node(), source);

    while let Some(m) = matches.next() {
        for capture in m.captures {
            if capture.index == specifier_idx {
                imports.push(ImportStmt::Esm {
                    specifier: node_text(capture.node, source).to_owned(),
                });
            }
        }
    }

    imports
}
