//! Drives a controller from a list of scripted steps.

use crate::draw::DrawSurface;
use crate::export::{self, ExportError};
use crate::import::{ImportCompletion, ImportManager, ImportOutcome};
use crate::input::{DrawingController, Effect};
use crate::script::Step;
use log::{debug, info};
use std::path::PathBuf;

/// Counters collected over one replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Input events handed to the controller
    pub events: usize,
    pub imports_drawn: usize,
    pub imports_failed: usize,
    pub imports_superseded: usize,
    /// Files written by export events, in order
    pub exports: Vec<PathBuf>,
}

/// Event loop for a headless session.
///
/// Events run one at a time on the calling thread; finished image decodes
/// are applied between events, as a browser would between input handlers.
pub struct Replay<S: DrawSurface> {
    controller: DrawingController<S>,
    imports: ImportManager,
    output_dir: PathBuf,
    summary: ReplaySummary,
}

impl<S: DrawSurface> Replay<S> {
    pub fn new(
        controller: DrawingController<S>,
        imports: ImportManager,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            controller,
            imports,
            output_dir,
            summary: ReplaySummary::default(),
        }
    }

    /// Runs every step, then waits for imports still in flight.
    ///
    /// Must be called outside the import runtime's async context.
    pub fn run(&mut self, steps: Vec<Step>) -> Result<ReplaySummary, ExportError> {
        info!("Replaying {} steps", steps.len());

        for step in steps {
            let ready = self.imports.try_completions();
            self.apply_completions(ready);

            match step {
                Step::Settle => self.settle(),
                Step::Input(event) => {
                    self.summary.events += 1;
                    match self.controller.handle(event)? {
                        Effect::None => {}
                        Effect::StartImport { ticket, path } => self.imports.request(ticket, path),
                        Effect::Download(image) => {
                            let path = export::save_download(&image, &self.output_dir)?;
                            self.summary.exports.push(path);
                        }
                    }
                }
            }
        }

        self.settle();
        info!(
            "Replay finished: {} events, {} exports",
            self.summary.events,
            self.summary.exports.len()
        );
        Ok(self.summary.clone())
    }

    pub fn controller(&self) -> &DrawingController<S> {
        &self.controller
    }

    pub fn into_controller(self) -> DrawingController<S> {
        self.controller
    }

    fn settle(&mut self) {
        if self.imports.pending() > 0 {
            debug!("Waiting for {} pending imports", self.imports.pending());
        }
        let done = self.imports.wait_all();
        self.apply_completions(done);
    }

    fn apply_completions(&mut self, completions: Vec<ImportCompletion>) {
        for completion in completions {
            match self.controller.finish_import(completion) {
                ImportOutcome::Drawn => self.summary.imports_drawn += 1,
                ImportOutcome::Failed(_) => self.summary.imports_failed += 1,
                ImportOutcome::Superseded => self.summary.imports_superseded += 1,
            }
        }
    }
}
