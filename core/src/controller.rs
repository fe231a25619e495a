//! The reveal controller — the single owner of the timeline state.
//!
//! RULES:
//!   - All cursor and playback mutation flows through this controller.
//!     No other component writes them.
//!   - Search results carry the generation token handed out by
//!     `begin_search`. A result whose generation has been superseded is
//!     dropped, never merged — stale markers must not appear over a new
//!     word's waypoints.
//!   - The controller is single-threaded and event-driven: one tick or
//!     one user input runs to completion before the next.

use crate::{
    config::AppConfig,
    cursor::Cursor,
    error::EvoResult,
    playback::{PlaybackDriver, TickOutcome},
    provider::{EtymologyDoc, PredictionDoc, WordProvider},
    render::{Marker, RenderFrame},
    reveal,
    types::{Generation, Year, YearBounds},
    viewport::ViewportDirector,
    waypoint::WaypointStore,
};

pub struct RevealController {
    config: AppConfig,
    generation: Generation,
    store: WaypointStore,
    etymology: Option<EtymologyDoc>,
    prediction: Option<PredictionDoc>,
    /// Absent until a search completes; discarded with the waypoint set.
    cursor: Option<Cursor>,
    playback: PlaybackDriver,
    viewport: ViewportDirector,
}

impl RevealController {
    pub fn new(config: AppConfig) -> EvoResult<Self> {
        let playback = PlaybackDriver::new(config.playback_step_years, config.playback_tick_ms)?;
        Ok(Self {
            config,
            generation: 0,
            store: WaypointStore::new(),
            etymology: None,
            prediction: None,
            cursor: None,
            playback,
            viewport: ViewportDirector::new(),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn current_year(&self) -> Option<Year> {
        self.cursor.map(|c| c.current_year())
    }

    pub fn bounds(&self) -> Option<YearBounds> {
        self.cursor.map(|c| c.bounds())
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn etymology(&self) -> Option<&EtymologyDoc> {
        self.etymology.as_ref()
    }

    pub fn prediction(&self) -> Option<&PredictionDoc> {
        self.prediction.as_ref()
    }

    /// Start a new search: discard the current waypoint set, bounds and
    /// documents, and hand out the generation token that the results
    /// must carry to be accepted. Playback state survives.
    pub fn begin_search(&mut self) -> Generation {
        self.generation += 1;
        self.store.clear();
        self.etymology = None;
        self.prediction = None;
        self.cursor = None;
        self.viewport.reset();
        log::debug!("search generation {} begins", self.generation);
        self.generation
    }

    /// Install an etymology result. Returns false (and changes nothing)
    /// when the generation has been superseded by a newer search.
    pub fn apply_etymology(&mut self, generation: Generation, doc: EtymologyDoc) -> EvoResult<bool> {
        if generation != self.generation {
            log::debug!("dropping superseded etymology (generation {generation})");
            return Ok(false);
        }

        let waypoints = doc.waypoints()?;
        let present = self.config.present_year;
        let bounds = YearBounds::new(doc.min_year(present), present)?;

        self.store.replace_all(waypoints);
        self.etymology = Some(doc);
        // The cursor lands on the upper bound; if playback was left
        // running across the replacement, it stops now, not on the
        // next tick.
        let mut cursor = Cursor::at_max(bounds);
        self.playback.set_bounds(&mut cursor, bounds);
        self.cursor = Some(cursor);
        self.viewport.reset();
        self.extend_bounds_for_prediction();
        Ok(true)
    }

    /// Attach a future prediction, extending the upper bound to its
    /// year. Superseded results are dropped.
    pub fn apply_prediction(&mut self, generation: Generation, doc: PredictionDoc) -> bool {
        if generation != self.generation {
            log::debug!("dropping superseded prediction (generation {generation})");
            return false;
        }
        self.prediction = Some(doc);
        self.extend_bounds_for_prediction();
        true
    }

    fn extend_bounds_for_prediction(&mut self) {
        let Some(prediction) = &self.prediction else {
            return;
        };
        let Some(cursor) = &mut self.cursor else {
            return;
        };
        let bounds = cursor.bounds();
        if prediction.year > bounds.max {
            // min unchanged, max grows: cannot violate min <= max.
            let extended = YearBounds {
                min: bounds.min,
                max: prediction.year,
            };
            self.playback.set_bounds(cursor, extended);
        }
    }

    /// Run a full search against a provider: etymology plus a future
    /// prediction at the configured horizon. Synchronous convenience
    /// for hosts without their own async plumbing.
    pub fn search(&mut self, word: &str, provider: &dyn WordProvider) -> EvoResult<Generation> {
        let generation = self.begin_search();
        let etymology = provider.etymology(word)?;
        self.apply_etymology(generation, etymology)?;
        let prediction = provider.predict(word, self.config.prediction_year, None)?;
        self.apply_prediction(generation, prediction);
        Ok(generation)
    }

    /// Manual timeline scrub. Clamped; never toggles playback by
    /// itself. No-op before a search completes.
    pub fn scrub(&mut self, year: Year) {
        if let Some(cursor) = &mut self.cursor {
            self.playback.scrub(cursor, year);
        }
    }

    /// Press play. No-op while already playing or without a timeline.
    pub fn play(&mut self) {
        if self.cursor.is_some() {
            self.playback.play();
        }
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    /// One playback timer firing.
    pub fn tick(&mut self) -> TickOutcome {
        match &mut self.cursor {
            Some(cursor) => self.playback.tick(cursor),
            None => TickOutcome::Idle,
        }
    }

    /// Close the details sidebar: the waypoint set, bounds and
    /// documents are discarded. Playback state survives.
    pub fn close_sidebar(&mut self) {
        self.store.clear();
        self.etymology = None;
        self.prediction = None;
        self.cursor = None;
        self.viewport.reset();
    }

    /// Produce the declarative frame for the map surface at the current
    /// cursor. Focus is present only when the active waypoint changed
    /// since the previous frame.
    pub fn frame(&mut self) -> RenderFrame {
        let Some(cursor) = self.cursor else {
            return RenderFrame::empty(self.config.present_year);
        };
        let year = cursor.current_year();
        let waypoints = self.store.as_slice();

        let revealed = reveal::revealed_set(waypoints, year);
        let active = reveal::active_waypoint(waypoints, year);
        let show_prediction = self.prediction.is_some() && year > self.config.present_year;

        RenderFrame {
            current_year: year,
            is_playing: self.playback.is_playing(),
            markers: revealed.iter().map(Marker::from).collect(),
            path: reveal::path_geometry(waypoints, year),
            region_highlight: reveal::active_region_code(waypoints, year),
            focus: self.viewport.direct(active.as_ref()),
            show_prediction,
        }
    }
}
