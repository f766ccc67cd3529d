use tree_sitter::Language;

/// The grammar used to parse a source file.
///
/// A plain enum (not trait objects) — cheap to copy and pattern-matched at
/// dispatch boundaries.
///
/// # Grammar selection rules
/// - `.py`        -> Python grammar
/// - `.ts`        -> TypeScript grammar (`LANGUAGE_TYPESCRIPT`)
/// - `.tsx`       -> TSX grammar        (`LANGUAGE_TSX`)
///   These MUST be different: the TypeScript grammar cannot parse JSX, and
///   the TSX grammar breaks angle-bracket type assertions (`<T>expr`).
/// - `.js`/`.jsx` -> JavaScript grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    Python,
    TypeScript,
    Tsx,
    JavaScript,
}

impl Grammar {
    /// Select a grammar from a file extension, or `None` if the extension is
    /// not a parsed source language.
    pub fn from_extension(ext: &str) -> Option<Grammar> {
        match ext {
            "py" => Some(Grammar::Python),
            "ts" => Some(Grammar::TypeScript),
            "tsx" => Some(Grammar::Tsx),
            "js" | "jsx" => Some(Grammar::JavaScript),
            _ => None,
        }
    }

    /// The tree-sitter [`Language`] for this grammar.
    pub fn language(self) -> Language {
        match self {
            Grammar::Python => tree_sitter_python::LANGUAGE.into(),
            Grammar::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Grammar::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Grammar::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    /// True for the JS/TS grammar family (ESM import extraction applies).
    pub fn is_js_family(self) -> bool {
        !matches!(self, Grammar::Python)
    }
}
