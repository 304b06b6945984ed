//! One conversion run: input files in, song pages plus index out.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::assets::{self, CSS_FILE, JS_FILE};
use crate::ast::Block;
use crate::config::Config;
use crate::error::ChoproError;
use crate::html::to_html;
use crate::parser::parse;
use crate::toc::{TableOfContents, INDEX_FILE};

/// State that lives for a whole run. Songs do not share anything else.
pub struct Session {
    config: Config,
    toc: TableOfContents,
    songs_written: usize,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let toc = TableOfContents::new(config.default_section.clone());
        Self {
            config,
            toc,
            songs_written: 0,
        }
    }

    pub fn toc(&self) -> &TableOfContents {
        &self.toc
    }

    /// Convert every input and write the index. Returns the number of song pages.
    ///
    /// Stops at the first failing input; pages written before it stay on disk.
    pub fn run(mut self, inputs: &[PathBuf]) -> Result<usize, ChoproError> {
        let dir = self.config.output_dir.clone();
        fs::create_dir_all(&dir).map_err(|source| ChoproError::Write {
            path: dir.clone(),
            source,
        })?;
        write_file(&dir.join(CSS_FILE), assets::stylesheet())?;
        write_file(&dir.join(JS_FILE), &assets::script())?;

        for input in inputs {
            info!("Converting {}...", input.display());
            self.convert_file(input)?;
        }

        self.toc.close_section();
        write_file(&dir.join(INDEX_FILE), &self.toc.to_html(&self.config.index_title))?;
        Ok(self.songs_written)
    }

    pub fn convert_file(&mut self, path: &Path) -> Result<(), ChoproError> {
        let source = fs::read_to_string(path).map_err(|source| ChoproError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.convert_str(&source).map_err(|e| match e {
            ChoproError::InvalidTranspose { .. } | ChoproError::MissingTitle { .. } => {
                ChoproError::InFile {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                }
            }
            other => other,
        })
    }

    /// Convert one chopro source, writing a page per song.
    pub fn convert_str(&mut self, source: &str) -> Result<(), ChoproError> {
        for block in parse(source)? {
            match block {
                Block::Section(name) => self.toc.start_section(name),
                Block::Song(song) => {
                    let path = self.config.output_dir.join(&song.file_name);
                    write_file(&path, &to_html(&song))?;
                    self.toc.add_page(song.title, song.file_name);
                    self.songs_written += 1;
                }
            }
        }
        Ok(())
    }
}

/// Expand `@list` arguments into the paths listed in that file, one per line.
pub fn expand_inputs(args: &[String]) -> Result<Vec<PathBuf>, ChoproError> {
    let mut inputs = Vec::new();
    for arg in args {
        match arg.strip_prefix('@') {
            Some(list) => {
                let content = fs::read_to_string(list).map_err(|source| ChoproError::Read {
                    path: PathBuf::from(list),
                    source,
                })?;
                inputs.extend(
                    content
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(PathBuf::from),
                );
            }
            None => inputs.push(PathBuf::from(arg)),
        }
    }
    Ok(inputs)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ChoproError> {
    fs::write(path, contents).map_err(|source| ChoproError::Write {
        path: path.to_path_buf(),
        source,
    })
}
