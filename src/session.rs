use std::time::{Duration, Instant};

use log::{debug, info};

use crate::highlight::{classify_word, CharState};
use crate::time_series::WpmSample;
use crate::timer::SampleClock;
use crate::util::calculate_wpm;

/// How long after the last keystroke the cursor starts blinking again
pub const IDLE_AFTER: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// waiting for the first keystroke
    Idle,
    Running,
    Finished,
}

/// One attempt at the word list, from first keystroke to the last submitted word.
///
/// All state lives here; the event loop only feeds it input values and the
/// current time. Retrying replaces the whole value.
#[derive(Debug, Clone)]
pub struct Session {
    words: Vec<String>,
    active_index: usize,
    buffer: String,
    status: SessionStatus,
    elapsed_secs: u64,
    correct_chars: usize,
    samples: Vec<WpmSample>,
    final_wpm: u32,
    clock: SampleClock,
    last_input_at: Option<Instant>,
}

impl Session {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            active_index: 0,
            buffer: String::new(),
            status: SessionStatus::Idle,
            elapsed_secs: 0,
            correct_chars: 0,
            samples: Vec::new(),
            final_wpm: 0,
            clock: SampleClock::new(),
            last_input_at: None,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_word(&self) -> Option<&str> {
        self.words.get(self.active_index).map(String::as_str)
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn has_started(&self) -> bool {
        self.status != SessionStatus::Idle
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn has_finished(&self) -> bool {
        self.status == SessionStatus::Finished
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn correct_chars(&self) -> usize {
        self.correct_chars
    }

    pub fn samples(&self) -> &[WpmSample] {
        &self.samples
    }

    pub fn final_wpm(&self) -> u32 {
        self.final_wpm
    }

    /// WPM from the running totals
    pub fn current_wpm(&self) -> u32 {
        calculate_wpm(self.correct_chars, self.elapsed_secs)
    }

    pub fn clock(&self) -> &SampleClock {
        &self.clock
    }

    /// Character classification for the active word, empty once finished.
    pub fn active_word_states(&self) -> Vec<CharState> {
        match (self.has_finished(), self.active_word()) {
            (false, Some(word)) => classify_word(word, &self.buffer),
            _ => Vec::new(),
        }
    }

    /// True before the first keystroke, right after a word is submitted, and
    /// once no input has arrived for [`IDLE_AFTER`].
    pub fn is_idle(&self, now: Instant) -> bool {
        match self.last_input_at {
            None => true,
            Some(at) => now.saturating_duration_since(at) >= IDLE_AFTER,
        }
    }

    pub fn on_input_change(&mut self, raw: &str) {
        self.on_input_change_at(raw, Instant::now());
    }

    /// Feed the full current value of the text input.
    ///
    /// A value ending in a space submits the buffered word. Anything else
    /// replaces the buffer, so edits and backspaces come through as-is.
    pub fn on_input_change_at(&mut self, raw: &str, now: Instant) {
        if self.has_finished() {
            return;
        }

        // ticks that came due before this keystroke land first
        self.advance_clock(now);

        if self.status == SessionStatus::Idle && !raw.is_empty() {
            self.status = SessionStatus::Running;
            self.clock.arm(now);
            info!("session started with {} words", self.words.len());
        }

        self.last_input_at = Some(now);

        if !raw.ends_with(' ') {
            self.buffer = raw.to_owned();
            return;
        }

        // repeated or leading spaces never submit an empty word
        if self.buffer.is_empty() {
            return;
        }

        self.submit_word();
    }

    fn submit_word(&mut self) {
        let typed = self.buffer.trim();
        let target = self.words.get(self.active_index);

        match target {
            Some(target) if typed == target => {
                self.correct_chars += target.chars().count() + 1;
                debug!("word {} correct: {target}", self.active_index);
            }
            _ => debug!("word {} missed: typed {typed:?}", self.active_index),
        }

        self.buffer.clear();

        if self.active_index + 1 >= self.words.len() {
            self.finish();
            return;
        }

        self.active_index += 1;
        self.last_input_at = None;
    }

    fn finish(&mut self) {
        self.status = SessionStatus::Finished;
        self.clock.cancel();
        self.final_wpm = calculate_wpm(self.correct_chars, self.elapsed_secs);
        info!(
            "session finished: {} wpm, {} correct chars in {}s",
            self.final_wpm, self.correct_chars, self.elapsed_secs
        );
    }

    /// Fire every one-second tick that has come due by `now`.
    pub fn advance_clock(&mut self, now: Instant) {
        if !self.is_running() {
            return;
        }

        for _ in 0..self.clock.take_due(now) {
            self.on_tick();
        }
    }

    /// One second passed: bump the clock and record a sample.
    ///
    /// Only the session's own clock fires this, so each real second is
    /// counted once.
    fn on_tick(&mut self) {
        if !self.is_running() {
            return;
        }

        self.elapsed_secs += 1;
        let sample = WpmSample::new(self.elapsed_secs, self.current_wpm());
        debug!("sample {}s {} wpm", sample.elapsed_secs, sample.wpm);
        self.samples.push(sample);
    }
}
