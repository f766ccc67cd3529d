pub mod imports;
pub mod languages;
pub mod python;

use std::cell::RefCell;

use anyhow::{Result, anyhow};
use tree_sitter::Parser;

use imports::extract_esm_imports;
use languages::Grammar;
use python::extract_python_imports;

// Thread-local Parser instances — one per rayon worker thread, zero lock
// contention. Each Parser is initialised once per thread with its grammar.
thread_local! {
    static PARSER_PY: RefCell<Parser> = RefCell::new({
        let mut p = Parser::new();
        p.set_language(&Grammar::Python.language()).unwrap();
        p
    });
    static PARSER_TS: RefCell<Parser> = RefCell::new({
        let mut p = Parser::new();
        p.set_language(&Grammar::TypeScript.language()).unwrap();
        p
    });
    static PARSER_TSX: RefCell<Parser> = RefCell::new({
        let mut p = Parser::new();
        p.set_language(&Grammar::Tsx.language()).unwrap();
        p
    });
    static PARSER_JS: RefCell<Parser> = RefCell::new({
        let mut p = Parser::new();
        p.set_language(&Grammar::JavaScript.language()).unwrap();
        p
    });
}

/// An import statement extracted from a source file, tagged by syntactic
/// form. The specifier/module string is exactly as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStmt {
    /// Python `import a.b` (including aliased `import a.b as c`).
    PlainImport { module: String },
    /// Python `from a.b import x` — only the module portion is carried.
    FromImport { module: String },
    /// JS/TS static `import ... from '<specifier>'`.
    Esm { specifier: String },
}

impl ImportStmt {
    /// The raw specifier string, independent of syntactic form.
    pub fn raw(&self) -> &str {
        match self {
            ImportStmt::PlainImport { module } | ImportStmt::FromImport { module } => module,
            ImportStmt::Esm { specifier } => specifier,
        }
    }
}

/// Parse a source file and extract its import statements, dispatching on the
/// file extension.
///
/// Unrecognized extensions yield an empty set — not an error. A recognized
/// file that tree-sitter cannot parse returns an error; the caller treats it
/// as zero imports and keeps the run going.
///
/// Uses the thread-local parser for the file's grammar, so this is safe and
/// cheap to call from rayon workers.
pub fn extract_file_imports(ext: &str, source: &[u8]) -> Result<Vec<ImportStmt>> {
    let grammar = match Grammar::from_extension(ext) {
        Some(g) => g,
        None => return Ok(Vec::new()),
    };

    let tree = match grammar {
        Grammar::Python => PARSER_PY.with(|p| p.borrow_mut().parse(source, None)),
        Grammar::TypeScript => PARSER_TS.with(|p| p.borrow_mut().parse(source, None)),
        Grammar::Tsx => PARSER_TSX.with(|p| p.borrow_mut().parse(source, None)),
        Grammar::JavaScript => PARSER_JS.with(|p| p.borrow_mut().parse(source, None)),
    };
    let tree = tree.ok_or_else(|| anyhow!("tree-sitter returned no tree for .{ext} source"))?;

    if grammar.is_js_family() {
        Ok(extract_esm_imports(&tree, source, grammar))
    } else {
        Ok(extract_python_imports(&tree, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_yields_empty() {
        let found = extract_file_imports("md", b"# not source").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_dispatch_python() {
        let found = extract_file_imports("py", b"import os\n").unwrap();
        assert_eq!(
            found,
            vec![ImportStmt::PlainImport {
                module: "os".into()
            }]
        );
    }

    #[test]
    fn test_dispatch_typescript() {
        let found = extract_file_imports("ts", b"import { a } from './a';\n").unwrap();
        assert_eq!(
            found,
            vec![ImportStmt::Esm {
                specifier: "./a".into()
            }]
        );
    }

    #[test]
    fn test_syntax_errors_still_yield_recognized_imports() {
        // tree-sitter is error-tolerant: a broken trailing statement does not
        // discard imports parsed earlier in the file.
        let src = b"import os\ndef broken(:\n";
        let found = extract_file_imports("py", src).unwrap();
        assert!(found.contains(&ImportStmt::PlainImport {
            module: "os".into()
        }));
    }
}
