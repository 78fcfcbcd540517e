use anyhow::Context;
use std::path::Path;

use contracts::domain::a001_post::aggregate::Post;
use contracts::domain::a002_tool::aggregate::Tool;
use contracts::domain::a003_creator::aggregate::Creator;
use contracts::domain::common::{Catalog, CatalogItem};
use contracts::enums::catalog_kind::CatalogKind;
use contracts::shared::catalog::coverage;
use serde::de::DeserializeOwned;

use crate::shared::config::{resolve_path, CatalogConfig};

const EMBEDDED_POSTS: &str = include_str!("../../../data/posts.json");
const EMBEDDED_TOOLS: &str = include_str!("../../../data/tools.json");
const EMBEDDED_CREATORS: &str = include_str!("../../../data/creators.json");

/// Статические каталоги сайта. Загружаются один раз при старте и дальше
/// только читаются.
#[derive(Debug)]
pub struct CatalogStore {
    pub posts: Catalog<Post>,
    pub tools: Catalog<Tool>,
    pub creators: Catalog<Creator>,
}

impl CatalogStore {
    /// Загрузить каталоги согласно конфигурации
    pub fn load(config: &CatalogConfig) -> anyhow::Result<Self> {
        match config.data_dir.as_deref() {
            Some(dir) => {
                let dir = resolve_path(dir);
                tracing::info!("Loading catalogs from: {}", dir.display());
                Self::from_dir(&dir)
            }
            None => {
                tracing::info!("Using catalogs embedded into the binary");
                Self::embedded()
            }
        }
    }

    /// Каталоги, встроенные в бинарник
    pub fn embedded() -> anyhow::Result<Self> {
        Ok(Self {
            posts: parse(CatalogKind::Posts, EMBEDDED_POSTS)?,
            tools: parse(CatalogKind::Tools, EMBEDDED_TOOLS)?,
            creators: parse(CatalogKind::Creators, EMBEDDED_CREATORS)?,
        })
    }

    /// Каталоги из каталога на диске (`posts.json`, `tools.json`, `creators.json`)
    pub fn from_dir(dir: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            posts: read(dir, CatalogKind::Posts)?,
            tools: read(dir, CatalogKind::Tools)?,
            creators: read(dir, CatalogKind::Creators)?,
        })
    }

    pub fn len(&self, kind: CatalogKind) -> usize {
        match kind {
            CatalogKind::Posts => self.posts.len(),
            CatalogKind::Tools => self.tools.len(),
            CatalogKind::Creators => self.creators.len(),
        }
    }
}

fn read<T>(dir: &Path, kind: CatalogKind) -> anyhow::Result<Catalog<T>>
where
    T: CatalogItem + DeserializeOwned,
{
    let path = dir.join(format!("{}.json", kind.code()));
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read catalog file {}", path.display()))?;
    parse(kind, &contents)
}

fn parse<T>(kind: CatalogKind, json: &str) -> anyhow::Result<Catalog<T>>
where
    T: CatalogItem + DeserializeOwned,
{
    let catalog = Catalog::from_json(kind, json)?;

    let report = coverage(catalog.items());
    if report.is_complete() {
        tracing::info!("Catalog '{}' loaded: {} items", kind, catalog.len());
    } else {
        tracing::warn!(
            "Catalog '{}' loaded: {} items, {} without full translation",
            kind,
            catalog.len(),
            report.missing()
        );
    }

    Ok(catalog)
}
