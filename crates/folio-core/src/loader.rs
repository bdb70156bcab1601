//! Sequential tile loader.
//!
//! Reveals the grid one cover at a time: a tile's image only starts loading
//! after the previous tile has finished (loaded or failed) and a short pacing
//! delay has elapsed. The cascade pauses while the document is hidden and
//! stops dead when its [`LoadSession`] is superseded.
//!
//! The loader never touches a DOM directly; it drives a [`TileHost`]. The web
//! app implements the host with Dioxus signals and browser timers, the tests
//! with tokio timers and scripted outcomes.

use std::future::Future;
use std::time::Duration;

use crate::error::MediaLoadError;
use crate::session::LoadSession;
use crate::types::ProjectRecord;

/// Default pause between two tiles.
pub const DEFAULT_PACING: Duration = Duration::from_millis(120);

/// Everything the cascade needs from the page.
///
/// Methods returning futures are suspension points. The loader races each of
/// them against session cancellation, so a host never has to check the
/// generation itself.
pub trait TileHost {
    /// Remove every tile from the grid.
    fn clear(&mut self);

    /// Insert a placeholder for `record` at cascade position `slot`.
    fn insert_placeholder(&mut self, slot: usize, record: &ProjectRecord);

    /// Start loading the cover for `slot` and wait for load or error.
    fn load_cover(
        &mut self,
        slot: usize,
        src: &str,
    ) -> impl Future<Output = Result<(), MediaLoadError>>;

    /// Swap the placeholder at `slot` for the finished tile.
    fn reveal(&mut self, slot: usize);

    /// Drop the tile at `slot` entirely.
    fn remove(&mut self, slot: usize);

    /// Wait for `delay`.
    fn pace(&mut self, delay: Duration) -> impl Future<Output = ()>;

    /// Wait until the grid is near the viewport.
    fn wait_until_in_view(&mut self) -> impl Future<Output = ()> {
        async {}
    }

    /// Whether the document is currently visible.
    fn document_visible(&mut self) -> impl Future<Output = bool> {
        async { true }
    }

    /// Wait for the document to become visible again.
    fn wait_until_visible(&mut self) -> impl Future<Output = ()> {
        async {}
    }
}

/// Counters for one cascade run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    /// Records whose load finished (either way)
    pub processed: usize,
    /// Tiles left in the grid
    pub revealed: usize,
    /// Tiles removed after a failed cover
    pub failed: usize,
}

/// How a cascade run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeOutcome {
    /// Every record was processed.
    Completed(CascadeReport),
    /// A newer session took over; nothing was touched after that point.
    Superseded(CascadeReport),
}

impl CascadeOutcome {
    pub fn report(&self) -> CascadeReport {
        match self {
            CascadeOutcome::Completed(report) | CascadeOutcome::Superseded(report) => *report,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, CascadeOutcome::Completed(_))
    }
}

/// The paced, strictly ordered reveal of a grid.
#[derive(Debug, Clone, Copy)]
pub struct TileCascade {
    pacing: Duration,
}

impl Default for TileCascade {
    fn default() -> Self {
        Self::new(DEFAULT_PACING)
    }
}

impl TileCascade {
    pub fn new(pacing: Duration) -> Self {
        Self { pacing }
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    /// Render `records` into `host` for `session`.
    ///
    /// The grid is cleared synchronously before the first suspension point.
    pub async fn run<H: TileHost>(
        &self,
        session: &LoadSession,
        records: &[ProjectRecord],
        host: &mut H,
    ) -> CascadeOutcome {
        let mut report = CascadeReport::default();

        if !session.is_current() {
            return CascadeOutcome::Superseded(report);
        }
        host.clear();

        if session.guard(host.wait_until_in_view()).await.is_none() {
            return CascadeOutcome::Superseded(report);
        }

        for (slot, record) in records.iter().enumerate() {
            if !session.is_current() {
                return self.superseded(session, report);
            }

            host.insert_placeholder(slot, record);

            let Some(src) = record.cover_src() else {
                tracing::warn!(slot, title = %record.title, "Project has no cover, skipping tile");
                host.remove(slot);
                report.processed += 1;
                report.failed += 1;
                continue;
            };

            let loaded = match session.guard(host.load_cover(slot, src)).await {
                Some(result) => result,
                None => return self.superseded(session, report),
            };

            report.processed += 1;
            match loaded {
                Ok(()) => {
                    host.reveal(slot);
                    report.revealed += 1;
                    tracing::debug!(slot, src, "Tile revealed");
                }
                Err(e) => {
                    host.remove(slot);
                    report.failed += 1;
                    tracing::warn!(slot, error = %e, "Cover failed, tile removed");
                }
            }

            if session.guard(host.pace(self.pacing)).await.is_none() {
                return self.superseded(session, report);
            }

            let visible = match session.guard(host.document_visible()).await {
                Some(visible) => visible,
                None => return self.superseded(session, report),
            };
            if !visible {
                tracing::debug!(slot, "Document hidden, cascade paused");
                if session.guard(host.wait_until_visible()).await.is_none() {
                    return self.superseded(session, report);
                }
            }
        }

        tracing::info!(
            generation = session.generation(),
            revealed = report.revealed,
            failed = report.failed,
            "Cascade finished"
        );
        CascadeOutcome::Completed(report)
    }

    fn superseded(&self, session: &LoadSession, report: CascadeReport) -> CascadeOutcome {
        tracing::debug!(
            generation = session.generation(),
            processed = report.processed,
            "Cascade superseded"
        );
        CascadeOutcome::Superseded(report)
    }
}
