//! Candle row state: a fixed-size ordered sequence of candles that go out
//! left to right (or by direct target) and only re-light on a full reset.

/// One candle on the cake.
#[derive(Clone, Copy, Debug)]
pub struct Candle {
    pub lit: bool,
}

/// Result of a successful extinguish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extinguished {
    pub index: usize,
    /// True exactly when this call put out the last remaining candle.
    pub all_out: bool,
}

#[derive(Clone, Debug)]
pub struct CandleRow {
    candles: Vec<Candle>,
}

impl CandleRow {
    pub fn new(total: usize) -> Self {
        Self {
            candles: vec![Candle { lit: true }; total],
        }
    }

    pub fn total(&self) -> usize {
        self.candles.len()
    }

    pub fn remaining(&self) -> usize {
        self.candles.iter().filter(|c| c.lit).count()
    }

    pub fn is_lit(&self, index: usize) -> bool {
        self.candles.get(index).map(|c| c.lit).unwrap_or(false)
    }

    /// Put out the first still-lit candle, left to right.
    pub fn extinguish_next(&mut self) -> Option<Extinguished> {
        let index = self.candles.iter().position(|c| c.lit)?;
        self.put_out(index)
    }

    /// Put out a specific candle. No-op when out of range or already out.
    pub fn extinguish_at(&mut self, index: usize) -> Option<Extinguished> {
        if !self.is_lit(index) {
            return None;
        }
        self.put_out(index)
    }

    fn put_out(&mut self, index: usize) -> Option<Extinguished> {
        self.candles.get_mut(index)?.lit = false;
        Some(Extinguished {
            index,
            all_out: self.remaining() == 0,
        })
    }

    pub fn relight_all(&mut self) {
        for c in &mut self.candles {
            c.lit = true;
        }
    }
}
