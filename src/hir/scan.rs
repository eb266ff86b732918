//! The scan pipeline: sanitize, preprocess, extract and lower every file,
//! then aggregate the result into a [`DesignIndex`].

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::debug;

use super::index::DesignIndex;
use super::lower::Lowerer;
use super::model::ModuleDefinition;
use crate::base::FileId;
use crate::parser::{KeywordDenylist, parse_structure};
use crate::syntax::{DefineSet, preprocess, sanitize};

/// Knobs for a single scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Run conditional compilation before extraction.
    pub preprocess: bool,
    /// Names that can never be a module type or an instance name.
    pub denylist: KeywordDenylist,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            preprocess: true,
            denylist: KeywordDenylist::default(),
        }
    }
}

/// Extract the modules of one file.
///
/// With `defines` present, conditional compilation runs against it and any
/// `` `define``/`` `undef`` in the file updates it for later files.
pub fn scan_file(
    file: FileId,
    text: &str,
    defines: Option<&mut DefineSet>,
    denylist: &KeywordDenylist,
) -> Vec<ModuleDefinition> {
    let mut clean = sanitize(text);
    if let Some(defines) = defines {
        clean = preprocess(&clean, defines);
    }
    let syntax = parse_structure(&clean, denylist);
    Lowerer::new(file, &clean).lower_modules(syntax)
}

/// Scan `files` in the given order and build the index.
///
/// File ids follow the order of `files`. Preprocessing threads `defines`
/// through the files one after another, so a `` `define`` in an earlier file
/// is visible to later ones; without preprocessing the files are independent
/// and are parsed in parallel.
pub fn scan<'a, I>(files: I, defines: &DefineSet, options: &ScanOptions) -> DesignIndex
where
    I: IntoIterator<Item = (PathBuf, &'a str)>,
{
    let (paths, texts): (Vec<PathBuf>, Vec<&str>) = files.into_iter().unzip();

    let per_file: Vec<Vec<ModuleDefinition>> = if options.preprocess {
        let mut defines = defines.clone();
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                scan_file(FileId::from(i), text, Some(&mut defines), &options.denylist)
            })
            .collect()
    } else {
        texts
            .par_iter()
            .enumerate()
            .map(|(i, text)| scan_file(FileId::from(i), text, None, &options.denylist))
            .collect()
    };

    for (path, modules) in paths.iter().zip(&per_file) {
        debug!(
            "scanned {}: {} module(s), {} instance(s)",
            path.display(),
            modules.len(),
            modules.iter().map(|m| m.instances.len()).sum::<usize>()
        );
    }

    DesignIndex::from_modules(paths, per_file.into_iter().flatten().collect())
}
