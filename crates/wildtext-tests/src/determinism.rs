//! Determinism checks over rendered canvases.

use std::fmt;

use wildtext_backend::Canvas;

/// First pixel that differs between two renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelDiff {
    pub x: u32,
    pub y: u32,
    pub expected: [u8; 3],
    pub actual: [u8; 3],
    /// Which run (0-indexed) diverged.
    pub run_index: usize,
}

impl fmt::Display for PixelDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pixel ({}, {}) expected {:?}, got {:?} (run {})",
            self.x, self.y, self.expected, self.actual, self.run_index
        )
    }
}

/// Result of rendering the same thing several times.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run's pixels.
    pub hash: String,
    /// First divergence, if any run differed.
    pub diff: Option<PixelDiff>,
}

impl DeterminismResult {
    pub fn is_deterministic(&self) -> bool {
        self.diff.is_none()
    }

    /// Panic with the first difference if runs diverged.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff {
            panic!(
                "Non-deterministic output detected!\nRuns: {}\nHash: {}\n{}",
                self.runs, self.hash, diff
            );
        }
    }
}

/// BLAKE3 hash of a canvas's raw pixels.
pub fn canvas_hash(canvas: &Canvas) -> String {
    blake3::hash(&canvas.to_rgb8()).to_hex().to_string()
}

/// Render `runs` times and compare every run with the first.
pub fn verify_determinism<F>(render: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> Canvas,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = render();
    let hash = canvas_hash(&reference);

    for run_index in 1..runs {
        let output = render();
        if let Some(diff) = first_difference(&reference, &output, run_index) {
            return DeterminismResult {
                runs,
                hash,
                diff: Some(diff),
            };
        }
    }

    DeterminismResult {
        runs,
        hash,
        diff: None,
    }
}

fn first_difference(reference: &Canvas, output: &Canvas, run_index: usize) -> Option<PixelDiff> {
    if reference.width != output.width || reference.height != output.height {
        return Some(PixelDiff {
            x: output.width,
            y: output.height,
            expected: [0; 3],
            actual: [0; 3],
            run_index,
        });
    }
    let w = reference.width.max(1) as usize;
    reference
        .data
        .iter()
        .zip(&output.data)
        .position(|(a, b)| a != b)
        .map(|i| PixelDiff {
            x: (i % w) as u32,
            y: (i / w) as u32,
            expected: reference.data[i],
            actual: output.data[i],
            run_index,
        })
}
