//! Namespace import blocks

/// Import statement syntax of the target language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportStyle {
    /// `using System.Text;`
    #[default]
    CSharp,
    /// `import java.util.List;`
    Java,
    /// `import os.path`
    Python,
    /// `#include <vector>`
    Cpp,
}

impl ImportStyle {
    /// Render a single import statement, without line terminator
    pub fn statement(self, namespace: &str) -> String {
        match self {
            ImportStyle::CSharp => format!("using {};", namespace),
            ImportStyle::Java => format!("import {};", namespace),
            ImportStyle::Python => format!("import {}", namespace),
            ImportStyle::Cpp => format!("#include <{}>", namespace),
        }
    }
}

/// Render a block of import statements, one per line.
///
/// Each entry is trimmed and skipped if blank; any `;` left in it is then
/// removed (the statement syntax re-adds its own terminator) and the entries
/// are sorted. An entry holding only `;` is not blank, so it still renders a
/// statement with an empty namespace. An empty list yields `None`; a list
/// holding only blank entries yields an empty block.
pub fn render_namespace_imports<S: AsRef<str>>(
    namespaces: &[S],
    style: ImportStyle,
) -> Option<String> {
    if namespaces.is_empty() {
        return None;
    }

    let mut entries: Vec<String> = namespaces
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|namespace| !namespace.is_empty())
        .map(|namespace| namespace.replace(';', ""))
        .collect();
    entries.sort_unstable();

    let mut code = String::new();
    for namespace in &entries {
        code.push_str(&style.statement(namespace));
        code.push('\n');
    }

    Some(code)
}
