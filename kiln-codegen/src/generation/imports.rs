//! Import records and per-file import lists.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

/// Reserved origin prefix for imports of entities that are not placed yet.
///
/// Never a valid module path; rendering refuses any record carrying it.
pub const PLACEHOLDER_PREFIX: &str = "__TEMPORARY_CLASS_PATH__";

/// Deferred origin standing in for `entity`'s file.
pub fn placeholder_origin(entity: &str) -> String {
    format!("{PLACEHOLDER_PREFIX}{entity}")
}

/// The symbols one file imports from one origin.
///
/// Symbols keep insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use kiln_codegen::generation::ImportRecord;
///
/// let mut record = ImportRecord::new("@nestjs/swagger");
/// record.merge("ApiProperty");
/// record.merge("ApiExtraModels");
/// record.merge("ApiProperty");
///
/// assert_eq!(
///     record.symbols().collect::<Vec<_>>(),
///     ["ApiProperty", "ApiExtraModels"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    origin: String,
    symbols: IndexSet<String>,
}

impl ImportRecord {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            symbols: IndexSet::new(),
        }
    }

    /// Add `symbol` unless already present. Returns whether it was added.
    pub fn merge(&mut self, symbol: impl Into<String>) -> bool {
        self.symbols.insert(symbol.into())
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    /// Entity this record waits on, if the origin is still a placeholder.
    pub fn placeholder_target(&self) -> Option<&str> {
        self.origin.strip_prefix(PLACEHOLDER_PREFIX)
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder_target().is_some()
    }
}

/// Ordered import records of one file, keyed by origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportList {
    records: IndexMap<String, ImportRecord>,
}

impl ImportList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import `symbol` from `origin`, merging into the record for `origin`
    /// or appending a new one.
    pub fn register(&mut self, symbol: impl Into<String>, origin: &str) {
        self.records
            .entry(origin.to_string())
            .or_insert_with(|| ImportRecord::new(origin))
            .merge(symbol);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImportRecord> {
        self.records.values()
    }

    pub fn get(&self, origin: &str) -> Option<&ImportRecord> {
        self.records.get(origin)
    }

    pub fn has_symbol(&self, origin: &str, symbol: &str) -> bool {
        self.get(origin).is_some_and(|r| r.has_symbol(symbol))
    }

    /// Records that still carry a placeholder origin.
    pub fn unresolved(&self) -> impl Iterator<Item = &ImportRecord> {
        self.records.values().filter(|r| r.is_placeholder())
    }

    /// Rewrite every placeholder record to the origin `resolve` returns.
    ///
    /// Origins are computed for all placeholders before any record changes,
    /// so a failure leaves the list untouched. A rewritten record that lands
    /// on an origin already present is merged into it. Returns the number of
    /// rewritten records; a second call returns 0.
    pub fn rewrite_placeholders<E>(
        &mut self,
        mut resolve: impl FnMut(&str) -> Result<String, E>,
    ) -> Result<usize, E> {
        let mut rewrites = HashMap::new();
        for record in self.unresolved() {
            if let Some(target) = record.placeholder_target() {
                rewrites.insert(record.origin.clone(), resolve(target)?);
            }
        }
        if rewrites.is_empty() {
            return Ok(0);
        }

        let records = std::mem::take(&mut self.records);
        for (origin, record) in records {
            let origin = rewrites.get(&origin).map_or(origin.as_str(), String::as_str);
            for symbol in record.symbols {
                self.register(symbol, origin);
            }
        }

        Ok(rewrites.len())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    fn symbols(list: &ImportList) -> Vec<(String, Vec<String>)> {
        list.iter()
            .map(|r| {
                (
                    r.origin().to_string(),
                    r.symbols().map(str::to_string).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut record = ImportRecord::new("@prisma/client");
        assert!(record.merge("Role"));
        assert!(!record.merge("Role"));

        assert_eq!(record.symbols().collect::<Vec<_>>(), ["Role"]);
    }

    #[test]
    fn test_merge_is_commutative_as_a_set() {
        let mut ab = ImportRecord::new("m");
        ab.merge("A");
        ab.merge("B");

        let mut ba = ImportRecord::new("m");
        ba.merge("B");
        ba.merge("A");

        let left: IndexSet<_> = ab.symbols().collect();
        let right: IndexSet<_> = ba.symbols().collect();
        assert!(left.iter().all(|s| right.contains(s)));
        assert_eq!(left.len(), right.len());
    }

    #[test]
    fn test_register_routes_by_origin() {
        let mut list = ImportList::new();
        list.register("ApiProperty", "@nestjs/swagger");
        list.register("Role", "@prisma/client");
        list.register("ApiExtraModels", "@nestjs/swagger");
        list.register("ApiProperty", "@nestjs/swagger");

        assert_eq!(list.len(), 2);
        assert!(list.has_symbol("@nestjs/swagger", "ApiExtraModels"));
        assert_eq!(
            list.get("@nestjs/swagger")
                .unwrap()
                .symbols()
                .collect::<Vec<_>>(),
            ["ApiProperty", "ApiExtraModels"]
        );
    }

    #[test]
    fn test_records_keep_first_registration_order() {
        let mut list = ImportList::new();
        list.register("Post", &placeholder_origin("Post"));
        list.register("Role", "@prisma/client");
        list.register("ApiProperty", "@nestjs/swagger");
        list.register("Status", "@prisma/client");

        let origins: Vec<_> = list.iter().map(ImportRecord::origin).collect();
        assert_eq!(
            origins,
            [
                "__TEMPORARY_CLASS_PATH__Post",
                "@prisma/client",
                "@nestjs/swagger"
            ]
        );
    }

    #[test]
    fn test_placeholder_target() {
        let record = ImportRecord::new(placeholder_origin("Post"));
        assert!(record.is_placeholder());
        assert_eq!(record.placeholder_target(), Some("Post"));
        assert!(!ImportRecord::new("./post").is_placeholder());
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let mut list = ImportList::new();
        list.register("Post", &placeholder_origin("Post"));
        list.register("Role", "@prisma/client");

        let rewrite = |target: &str| Ok::<_, Infallible>(format!("./{}", target.to_lowercase()));

        assert_eq!(list.rewrite_placeholders(rewrite).unwrap(), 1);
        let once = list.clone();
        assert_eq!(list.rewrite_placeholders(rewrite).unwrap(), 0);

        assert_eq!(list, once);
        assert_eq!(list.unresolved().count(), 0);
        assert_eq!(
            symbols(&list),
            [
                ("./post".to_string(), vec!["Post".to_string()]),
                ("@prisma/client".to_string(), vec!["Role".to_string()]),
            ]
        );
    }

    #[test]
    fn test_rewrite_merges_colliding_origins() {
        let mut list = ImportList::new();
        list.register("Post", "./models");
        list.register("Comment", &placeholder_origin("Comment"));

        list.rewrite_placeholders(|_| Ok::<_, Infallible>("./models".to_string()))
            .unwrap();

        assert_eq!(
            symbols(&list),
            [(
                "./models".to_string(),
                vec!["Post".to_string(), "Comment".to_string()]
            )]
        );
    }

    #[test]
    fn test_failed_rewrite_leaves_list_untouched() {
        let mut list = ImportList::new();
        list.register("Post", &placeholder_origin("Post"));
        list.register("Tag", &placeholder_origin("Tag"));
        let before = list.clone();

        let result = list.rewrite_placeholders(|target| match target {
            "Post" => Ok("./post".to_string()),
            other => Err(other.to_string()),
        });

        assert_eq!(result, Err("Tag".to_string()));
        assert_eq!(list, before);
    }
}
