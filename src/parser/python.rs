use std::sync::OnceLock;

use tree_sitter::{Node, Query, QueryCursor, StreamingIterator, Tree};

use super::ImportStmt;
use super::languages::Grammar;

/// Tree-sitter query for `import a.b` statements, including `import a.b as c`.
/// Each name in a comma-separated import produces its own match.
const PLAIN_IMPORT_QUERY: &str = r#"
    (import_statement
      name: (dotted_name) @module)
    (import_statement
      name: (aliased_import
        name: (dotted_name) @module))
"#;

/// Tree-sitter query for `from a.b import x` statements.
///
/// For relative imports (`from .mod import x`) only the dotted name after the
/// dots is captured — the leading-dot level is dropped, so `from . import x`
/// yields no specifier at all. Multi-level relative imports therefore resolve
/// as if the module were importer-relative or root-relative, which the
/// resolver's dual-base probing covers.
const FROM_IMPORT_QUERY: &str = r#"
    (import_from_statement
      module_name: (dotted_name) @module)
    (import_from_statement
      module_name: (relative_import (dotted_name) @module))
"#;

static PLAIN_QUERY: OnceLock<Query> = OnceLock::new();
static FROM_QUERY: OnceLock<Query> = OnceLock::new();

fn plain_query() -> &'static Query {
    PLAIN_QUERY.get_or_init(|| {
        Query::new(&Grammar::Python.language(), PLAIN_IMPORT_QUERY)
            .expect("invalid plain import query")
    })
}

fn from_query() -> &'static Query {
    FROM_QUERY.get_or_init(|| {
        Query::new(&Grammar::Python.language(), FROM_IMPORT_QUERY)
            .expect("invalid from-import query")
    })
}

fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Extract every import statement from a parsed Python syntax tree as a
/// tagged [`ImportStmt`] — `Plain` for `import a.b`, `From` for
/// `from a.b import x`.
pub fn extract_python_imports(tree: &Tree, source: &[u8]) -> Vec<ImportStmt> {
    let mut imports = Vec::new();

    collect(plain_query(), tree, source, &mut imports, |module| {
        ImportStmt::PlainImport { module }
    });
    collect(from_query(), tree, source, &mut imports, |module| {
        ImportStmt::FromImport { module }
    });

    imports
}

fn collect(
    query: &Query,
    tree: &Tree,
    source: &[u8],
    out: &mut Vec<ImportStmt>,
    make: impl Fn(String) -> ImportStmt,
) {
    let module_idx = query
        .capture_index_for_name("module")
        .expect("python import query must have @module");

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, tree.root_node(), source);
    while let Some(m) = matches.next() {
        for capture in m.captures {
            if capture.index == module_idx {
                out.push(make(node_text(capture.node, source).to_owned()));
            }
        }
    }
}
