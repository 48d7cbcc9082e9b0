use serde::Serialize;

/// A module reference found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub specifier: String,
    /// Imported names of a static import declaration, in declaration order.
    /// Default and namespace bindings have no imported name and are left out.
    /// `None` for every construct other than an import declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_names: Option<Vec<String>>,
    pub kind: DependencyKind,
}

impl Dependency {
    pub fn new(specifier: impl Into<String>, kind: DependencyKind) -> Self {
        Self { specifier: specifier.into(), imported_names: None, kind }
    }

    pub fn with_imported_names(mut self, names: Vec<String>) -> Self {
        self.imported_names = Some(names);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyKind {
    /// `import ... from 'x'`
    Import,
    /// `import('x')`
    DynamicImport,
    /// `export ... from 'x'` and `export * from 'x'`
    Export,
    /// `import x = require('x')`
    ImportEquals,
    /// `import('x').T` in type position
    ImportType,
    /// `require('x')` and `require.main.require('x')`
    Require,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_omits_missing_imported_names() {
        let dep = Dependency::new("pkg", DependencyKind::Export);
        let json = serde_json::to_string(&dep).unwrap();
        assert_eq!(json, r#"{"specifier":"pkg","kind":"export"}"#);
    }

    #[test]
    fn test_serialize_imported_names_camel_case() {
        let dep = Dependency::new("./mod", DependencyKind::Import)
            .with_imported_names(vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_string(&dep).unwrap();
        assert_eq!(json, r#"{"specifier":"./mod","importedNames":["a","b"],"kind":"import"}"#);
    }

    #[test]
    fn test_serialize_kind_names() {
        let kind = serde_json::to_string(&DependencyKind::DynamicImport).unwrap();
        assert_eq!(kind, r#""dynamicImport""#);
        let kind = serde_json::to_string(&DependencyKind::ImportEquals).unwrap();
        assert_eq!(kind, r#""importEquals""#);
    }
}
