//! Time domain feature functions
//!
//! Each function is a pure, stateless reduction of one channel of one window
//! to a single value. Identical input yields bit-identical output.

use ndarray::ArrayView1;

/// Mean Absolute Value (MAV)
pub fn mean_absolute_value(channel: ArrayView1<'_, f32>) -> f32 {
    channel.iter().map(|x| x.abs()).sum::<f32>() / channel.len() as f32
}

/// Zero Crossings (ZC) count.
///
/// A crossing is counted when consecutive samples sit on opposite sides of
/// the deadband around zero.
pub fn zero_crossings(channel: ArrayView1<'_, f32>, threshold: f32) -> f32 {
    let mut count = 0u32;
    for pair in channel.windows(2) {
        let (curr, next) = (pair[0], pair[1]);
        if (curr >= threshold && next <= -threshold) || (curr <= -threshold && next >= threshold) {
            count += 1;
        }
    }
    count as f32
}

/// Slope Sign Changes (SSC) count.
///
/// Counted when the slope flips sign across a sample, with both slopes
/// outside the deadband.
pub fn slope_sign_changes(channel: ArrayView1<'_, f32>, threshold: f32) -> f32 {
    if channel.len() < 3 {
        return 0.0;
    }

    let mut count = 0u32;
    for i in 1..channel.len() - 1 {
        let prev_slope = channel[i] - channel[i - 1];
        let next_slope = channel[i + 1] - channel[i];

        if (prev_slope > threshold && next_slope < -threshold)
            || (prev_slope < -threshold && next_slope > threshold)
        {
            count += 1;
        }
    }
    count as f32
}

/// Waveform Length (WL), the cumulative absolute sample-to-sample change
pub fn waveform_length(channel: ArrayView1<'_, f32>) -> f32 {
    channel
        .windows(2)
        .into_iter()
        .map(|pair| (pair[1] - pair[0]).abs())
        .sum()
}

/// Root Mean Square (RMS)
pub fn root_mean_square(channel: ArrayView1<'_, f32>) -> f32 {
    let sum_squares: f32 = channel.iter().map(|x| x * x).sum();
    (sum_squares / channel.len() as f32).sqrt()
}

/// Signal variance (VAR), population form
pub fn variance(channel: ArrayView1<'_, f32>) -> f32 {
    let mean = channel.iter().sum::<f32>() / channel.len() as f32;
    channel.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / channel.len() as f32
}
