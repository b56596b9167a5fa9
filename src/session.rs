//! The long-lived driver: current parameters, a resize debouncer and the
//! last layout that computed successfully.

use std::time::Instant;

use crate::errors::ConfigError;
use crate::layout::{LayoutResult, compute_layout};
use crate::log;
use crate::params::LayoutParams;
use crate::render::{DrawingSurface, render_layout};
use crate::schedule::Debouncer;

#[derive(Debug, Clone, Default)]
pub struct LayoutSession {
    params: LayoutParams,
    debouncer: Debouncer,
    last: Option<LayoutResult>,
}

impl LayoutSession {
    /// Nothing is computed until the first [`refresh`](Self::refresh),
    /// [`set_params`](Self::set_params) or debounced resize.
    pub fn new(params: LayoutParams) -> Self {
        LayoutSession {
            params,
            debouncer: Debouncer::default(),
            last: None,
        }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// The most recent successful layout
    pub fn current(&self) -> Option<&LayoutResult> {
        self.last.as_ref()
    }

    pub fn resize_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Replace the parameters and recompute right away.
    ///
    /// On error the new parameters are kept but the previous layout stays
    /// current and the surface is left untouched.
    pub fn set_params(
        &mut self,
        params: LayoutParams,
        surface: &mut dyn DrawingSurface,
    ) -> Result<&LayoutResult, ConfigError> {
        self.params = params;
        self.refresh(surface)
    }

    /// Recompute from the current parameters and redraw.
    pub fn refresh(&mut self, surface: &mut dyn DrawingSurface) -> Result<&LayoutResult, ConfigError> {
        let result = match compute_layout(&self.params) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("layout failed, keeping previous result: {}", err);
                return Err(err);
            }
        };
        render_layout(&result, surface);
        Ok(&*self.last.insert(result))
    }

    /// The viewport changed size; recompute once things settle.
    pub fn notify_resize(&mut self, now: Instant) {
        self.debouncer.trigger(now);
    }

    /// Run the debounced recomputation if it is due.
    pub fn poll(
        &mut self,
        now: Instant,
        surface: &mut dyn DrawingSurface,
    ) -> Option<Result<&LayoutResult, ConfigError>> {
        if !self.debouncer.poll(now) {
            return None;
        }
        log::trace!("resize settled, recomputing");
        Some(self.refresh(surface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{CARD_STROKE, RESIZE_DEBOUNCE};
    use crate::render::RecordingSurface;

    fn a4() -> LayoutParams {
        LayoutParams {
            paper: "A4".to_string(),
            ..LayoutParams::default()
        }
    }

    #[test]
    fn set_params_recomputes_and_draws() {
        let mut session = LayoutSession::new(LayoutParams::default());
        let mut surface = RecordingSurface::new(297.0, 420.0);
        assert!(session.current().is_none());

        let cards = session.set_params(a4(), &mut surface).unwrap().registry.len();
        assert_eq!(cards, 5);
        assert_eq!(surface.polylines_in(CARD_STROKE).count(), 5);
        assert_eq!(session.params().paper, "A4");
    }

    #[test]
    fn failed_update_keeps_previous_layout() {
        let mut session = LayoutSession::new(a4());
        let mut surface = RecordingSurface::new(100.0, 100.0);
        session.refresh(&mut surface).unwrap();
        let drawn = surface.calls().to_vec();

        let bad = LayoutParams {
            angle: 120.0,
            ..a4()
        };
        assert!(matches!(
            session.set_params(bad, &mut surface),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert_eq!(session.current().unwrap().registry.len(), 5);
        assert_eq!(surface.calls(), drawn.as_slice());
    }

    #[test]
    fn resize_redraws_only_after_debounce() {
        let t0 = Instant::now();
        let mut session = LayoutSession::new(a4());
        let mut surface = RecordingSurface::new(100.0, 100.0);

        session.notify_resize(t0);
        surface.resize(200.0, 200.0);
        session.notify_resize(t0 + RESIZE_DEBOUNCE / 2);
        assert!(session.poll(t0 + RESIZE_DEBOUNCE, &mut surface).is_none());
        assert!(surface.calls().is_empty());

        let fired = session.poll(t0 + RESIZE_DEBOUNCE * 2, &mut surface);
        assert!(matches!(fired, Some(Ok(_))));
        assert!(!session.resize_pending());
        assert!(session.poll(t0 + RESIZE_DEBOUNCE * 3, &mut surface).is_none());
        assert!(!surface.calls().is_empty());
    }
}
