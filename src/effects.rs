//! Timer-driven text effects
//!
//! Each effect is a repeating task advanced from frame time (seconds, as
//! reported by the GUI). The owning view starts it on mount and must stop it
//! on unmount; a stopped effect ignores ticks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 解密动画字符集
pub const SCRAMBLE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%&[]{}<>";
/// 数字雨字符集 (片假名 + 拉丁 + 数字)
pub const RAIN_CHARS: &str = "アァカサタナハマヤャラワガザダバパイィキシチニヒミリヰギジヂビピウゥクスツヌフムユュルグズブヅプエェケセテネヘメレヱゲゼデベペオォコソトノホモヨョロヲゴゾドボポヴッン0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Fixed-interval clock with an accumulator, so slow frames catch up.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: f64,
    last_time: Option<f64>,
    accumulator: f64,
}

impl Ticker {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval: interval_secs.max(f64::EPSILON),
            last_time: None,
            accumulator: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.last_time.is_some()
    }

    pub fn start(&mut self, now: f64) {
        self.last_time = Some(now);
        self.accumulator = 0.0;
    }

    pub fn stop(&mut self) {
        self.last_time = None;
        self.accumulator = 0.0;
    }

    /// Number of whole intervals elapsed since the previous call
    pub fn advance(&mut self, now: f64) -> u32 {
        let Some(last) = self.last_time else {
            return 0;
        };
        self.accumulator += (now - last).max(0.0);
        self.last_time = Some(now);
        let ticks = (self.accumulator / self.interval).floor();
        self.accumulator -= ticks * self.interval;
        ticks as u32
    }
}

// ========== Decrypt / scramble reveal ==========

/// Reveals `text` left to right; not-yet-revealed characters cycle through
/// random glyphs. Half a character is revealed per 30 ms tick.
pub struct DecryptText {
    target: Vec<char>,
    display: String,
    progress: f32,
    ticker: Ticker,
    rng: StdRng,
}

impl DecryptText {
    pub const TICK_SECS: f64 = 0.030;
    const STEP: f32 = 0.5;

    pub fn new(text: &str) -> Self {
        Self::with_rng(text, StdRng::from_entropy())
    }

    pub fn with_rng(text: &str, rng: StdRng) -> Self {
        Self {
            target: text.chars().collect(),
            display: text.to_string(),
            progress: 0.0,
            ticker: Ticker::new(Self::TICK_SECS),
            rng,
        }
    }

    pub fn text(&self) -> &str {
        &self.display
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Replace the target (language switch) and replay the reveal
    pub fn set_text(&mut self, text: &str, now: f64) {
        let chars: Vec<char> = text.chars().collect();
        if chars != self.target {
            self.target = chars;
            self.display = text.to_string();
            self.start(now);
        }
    }

    /// (Re)start the reveal, e.g. on mount or hover
    pub fn start(&mut self, now: f64) {
        self.progress = 0.0;
        self.ticker.start(now);
        self.scramble();
    }

    pub fn stop(&mut self) {
        self.ticker.stop();
        self.display = self.target.iter().collect();
    }

    pub fn tick(&mut self, now: f64) {
        for _ in 0..self.ticker.advance(now) {
            if self.progress >= self.target.len() as f32 {
                self.stop();
                return;
            }
            self.progress += Self::STEP;
            self.scramble();
        }
    }

    fn scramble(&mut self) {
        let glyphs: Vec<char> = SCRAMBLE_CHARS.chars().collect();
        let revealed = self.progress;
        self.display = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if (i as f32) < revealed {
                    c
                } else {
                    glyphs[self.rng.gen_range(0..glyphs.len())]
                }
            })
            .collect();
    }
}

// ========== Typewriter ==========

/// Types `text` one character per tick after an initial delay.
#[derive(Debug, Clone)]
pub struct TypingText {
    chars: Vec<char>,
    shown: usize,
    delay: f64,
    started_at: Option<f64>,
    ticker: Ticker,
}

impl TypingText {
    pub const TICK_SECS: f64 = 0.015;

    pub fn new(text: &str, delay_secs: f64) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            delay: delay_secs,
            started_at: None,
            ticker: Ticker::new(Self::TICK_SECS),
        }
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn start(&mut self, now: f64) {
        self.shown = 0;
        self.started_at = Some(now);
        self.ticker.stop();
    }

    pub fn stop(&mut self) {
        self.started_at = None;
        self.ticker.stop();
    }

    pub fn tick(&mut self, now: f64) {
        let Some(started_at) = self.started_at else {
            return;
        };
        let begin = started_at + self.delay;
        if now < begin {
            return;
        }
        if !self.ticker.is_running() {
            self.ticker.start(begin);
        }
        let ticks = self.ticker.advance(now) as usize;
        self.shown = (self.shown + ticks).min(self.chars.len());
        if self.is_done() {
            self.stop();
        }
    }
}

// ========== Digital rain ==========

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainGlyph {
    pub column: usize,
    pub row: u32,
    pub ch: char,
    /// 偶尔高亮的白色字符
    pub bright: bool,
    /// 0.0 (new) ..= 1.0 (faded out)
    pub age: f32,
}

/// Falling glyph columns on a character grid (~30 fps)
pub struct MatrixRain {
    drops: Vec<u32>,
    rows: u32,
    trail: Vec<RainGlyph>,
    ticker: Ticker,
    rng: StdRng,
    glyphs: Vec<char>,
}

impl MatrixRain {
    pub const TICK_SECS: f64 = 0.033;
    /// 每帧拖尾衰减
    const FADE: f32 = 0.05;

    pub fn new(columns: usize, rows: u32) -> Self {
        Self::with_rng(columns, rows, StdRng::from_entropy())
    }

    pub fn with_rng(columns: usize, rows: u32, rng: StdRng) -> Self {
        Self {
            drops: vec![1; columns],
            rows: rows.max(1),
            trail: Vec::new(),
            ticker: Ticker::new(Self::TICK_SECS),
            rng,
            glyphs: RAIN_CHARS.chars().collect(),
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn glyphs(&self) -> &[RainGlyph] {
        &self.trail
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn start(&mut self, now: f64) {
        self.ticker.start(now);
    }

    pub fn stop(&mut self) {
        self.ticker.stop();
        self.trail.clear();
    }

    /// Grid changed (window resized): reset every column
    pub fn resize(&mut self, columns: usize, rows: u32) {
        if columns != self.drops.len() || rows.max(1) != self.rows {
            self.drops = vec![1; columns];
            self.rows = rows.max(1);
            self.trail.clear();
        }
    }

    pub fn tick(&mut self, now: f64) {
        for _ in 0..self.ticker.advance(now) {
            self.step();
        }
    }

    fn step(&mut self) {
        for glyph in &mut self.trail {
            glyph.age += Self::FADE;
        }
        self.trail.retain(|g| g.age < 1.0);

        for (column, drop) in self.drops.iter_mut().enumerate() {
            let ch = self.glyphs[self.rng.gen_range(0..self.glyphs.len())];
            let bright = self.rng.gen_bool(0.02);
            self.trail.push(RainGlyph { column, row: *drop, ch, bright, age: 0.0 });

            // 越过底部后随机回到顶部
            if *drop > self.rows && self.rng.gen_bool(0.025) {
                *drop = 0;
            }
            *drop += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_ticker_accumulates() {
        let mut t = Ticker::new(0.1);
        assert_eq!(t.advance(1.0), 0);
        t.start(0.0);
        assert_eq!(t.advance(0.05), 0);
        assert_eq!(t.advance(0.25), 2);
        t.stop();
        assert_eq!(t.advance(5.0), 0);
    }

    #[test]
    fn test_decrypt_reveals_then_stops() {
        let mut fx = DecryptText::with_rng("NEO", rng());
        fx.start(0.0);
        assert!(fx.is_running());
        assert_eq!(fx.text().chars().count(), 3);
        // 3 chars * 2 ticks each + 1 to notice completion
        fx.tick(DecryptText::TICK_SECS * 7.5);
        assert!(!fx.is_running());
        assert_eq!(fx.text(), "NEO");
    }

    #[test]
    fn test_decrypt_stop_restores_text() {
        let mut fx = DecryptText::with_rng("clarity", rng());
        fx.start(0.0);
        fx.tick(0.05);
        fx.stop();
        assert_eq!(fx.text(), "clarity");
        fx.tick(10.0);
        assert_eq!(fx.text(), "clarity");
    }

    #[test]
    fn test_decrypt_set_text_restarts() {
        let mut fx = DecryptText::with_rng("clarity", rng());
        fx.set_text("清晰", 1.0);
        assert!(fx.is_running());
        fx.tick(2.0);
        assert_eq!(fx.text(), "清晰");
    }

    #[test]
    fn test_typing_waits_for_delay() {
        let mut fx = TypingText::new("hello", 1.0);
        fx.start(0.0);
        fx.tick(0.5);
        assert_eq!(fx.visible(), "");
        fx.tick(1.0 + TypingText::TICK_SECS * 2.5);
        assert_eq!(fx.visible(), "he");
        fx.tick(5.0);
        assert_eq!(fx.visible(), "hello");
        assert!(fx.is_done());
        assert!(!fx.is_running());
    }

    #[test]
    fn test_typing_stopped_ignores_ticks() {
        let mut fx = TypingText::new("hello", 0.0);
        fx.start(0.0);
        fx.stop();
        fx.tick(10.0);
        assert_eq!(fx.visible(), "");
    }

    #[test]
    fn test_rain_lifecycle() {
        let mut rain = MatrixRain::with_rng(4, 10, rng());
        rain.tick(1.0);
        assert!(rain.glyphs().is_empty());

        rain.start(0.0);
        rain.tick(MatrixRain::TICK_SECS * 3.5);
        assert_eq!(rain.glyphs().len(), 12);
        assert!(rain.glyphs().iter().all(|g| g.column < 4));

        rain.stop();
        assert!(!rain.is_running());
        assert!(rain.glyphs().is_empty());
        rain.tick(100.0);
        assert!(rain.glyphs().is_empty());
    }

    #[test]
    fn test_rain_resize_resets() {
        let mut rain = MatrixRain::with_rng(4, 10, rng());
        rain.start(0.0);
        rain.tick(1.0);
        rain.resize(8, 10);
        assert_eq!(rain.columns(), 8);
        assert!(rain.glyphs().is_empty());
    }
}
