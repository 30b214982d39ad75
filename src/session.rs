//! One operator session: the cursor, the persisted directories, and the last
//! rendered view. Every operator action runs to completion here (file
//! operation, reload, render) before the next one is accepted.

use crate::config::DirConfig;
use crate::domain::{delete_file, move_file, Cursor, DeleteMode};
use crate::error::Result;
use crate::preview::{render_current, Rendered};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

/// Which destination sub-folder a file is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Positive,
    Negative,
}

impl Verdict {
    pub fn sub_folder(self) -> &'static str {
        match self {
            Verdict::Positive => "pos",
            Verdict::Negative => "neg",
        }
    }
}

/// What the image pane shows after the last action.
#[derive(Debug, Clone)]
pub enum View {
    Image(Rendered),
    /// Operation or decode failure, shown instead of the image
    Failed(String),
}

/// Counts of completed sorting actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub positive: usize,
    pub negative: usize,
    pub deleted: usize,
}

impl SessionStats {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.deleted
    }
}

pub struct Session {
    cursor: Cursor,
    config: DirConfig,
    config_path: PathBuf,
    delete_mode: DeleteMode,
    rng: StdRng,
    view: View,
    stats: SessionStats,
}

impl Session {
    pub fn new(config: DirConfig, config_path: PathBuf, delete_mode: DeleteMode) -> Self {
        Self::with_rng(config, config_path, delete_mode, StdRng::from_os_rng())
    }

    pub fn with_rng(
        config: DirConfig,
        config_path: PathBuf,
        delete_mode: DeleteMode,
        rng: StdRng,
    ) -> Self {
        Self {
            cursor: Cursor::new(),
            config,
            config_path,
            delete_mode,
            rng,
            view: View::Image(Rendered::placeholder()),
            stats: SessionStats::default(),
        }
    }

    /// Loads the source directory at its first image.
    pub fn open(&mut self) {
        let src = self.config.src_dir.clone();
        let result = self.cursor.load(&src, None);
        self.finish(result);
    }

    /// Reloads the source directory at a random image.
    pub fn refresh(&mut self) {
        let src = self.config.src_dir.clone();
        let result = self.cursor.reseed(&src, &mut self.rng);
        self.finish(result);
    }

    pub fn next(&mut self) {
        self.cursor.next();
        self.finish(Ok(()));
    }

    pub fn prev(&mut self) {
        self.cursor.prev();
        self.finish(Ok(()));
    }

    /// Moves the current image into `dst_dir/pos` or `dst_dir/neg`.
    pub fn select(&mut self, verdict: Verdict) {
        let result = self.try_select(verdict);
        self.finish(result);
    }

    /// Deletes the current image.
    pub fn delete(&mut self) {
        let result = self.try_delete();
        self.finish(result);
    }

    /// Sets and persists the source directory, then reopens it.
    ///
    /// If the new directory cannot be listed the cursor is emptied, so no
    /// later action touches the previous directory.
    pub fn set_src_dir(&mut self, text: &str) {
        self.config.src_dir = PathBuf::from(text.trim());
        if let Err(e) = self.config.save(&self.config_path) {
            self.cursor.clear();
            self.fail(e.to_string());
            return;
        }

        let src = self.config.src_dir.clone();
        let result = self.cursor.load(&src, None);
        if result.is_err() {
            self.cursor.clear();
        }
        self.finish(result);
    }

    /// Sets and persists the destination directory.
    pub fn set_dst_dir(&mut self, text: &str) {
        self.config.dst_dir = PathBuf::from(text.trim());
        if let Err(e) = self.config.save(&self.config_path) {
            self.fail(e.to_string());
        }
    }

    fn try_select(&mut self, verdict: Verdict) -> Result<()> {
        let Some((dir, name)) = self.current_file() else {
            return Ok(());
        };

        let dst = self.config.dst_dir.join(verdict.sub_folder());
        move_file(&dir, &dst, &name)?;
        match verdict {
            Verdict::Positive => self.stats.positive += 1,
            Verdict::Negative => self.stats.negative += 1,
        }

        self.reload_keeping_position(&dir)
    }

    fn try_delete(&mut self) -> Result<()> {
        let Some((dir, name)) = self.current_file() else {
            return Ok(());
        };

        delete_file(&dir, &name, self.delete_mode)?;
        self.stats.deleted += 1;

        self.reload_keeping_position(&dir)
    }

    fn current_file(&self) -> Option<(PathBuf, String)> {
        let dir = self.cursor.directory()?;
        let name = self.cursor.current()?;
        Some((dir.to_path_buf(), name.to_string()))
    }

    fn reload_keeping_position(&mut self, dir: &Path) -> Result<()> {
        let position = self.cursor.position();
        self.cursor.load(dir, position)
    }

    fn finish(&mut self, result: Result<()>) {
        match result.and_then(|()| render_current(&self.cursor)) {
            Ok(rendered) => self.view = View::Image(rendered),
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn fail(&mut self, message: String) {
        tracing::error!(%message, "action failed");
        self.view = View::Failed(message);
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn config(&self) -> &DirConfig {
        &self.config
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn delete_mode(&self) -> DeleteMode {
        self.delete_mode
    }
}
