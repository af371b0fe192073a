//! Shared fixtures for integration tests

#![allow(dead_code)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

const NAN: f64 = f64::NAN;

/// 360 monthly precipitation-like observations with seven missing values
pub fn reference_series() -> Vec<f64> {
    vec![
        32.0, 20.0, 25.0, 189.0, 240.0, 193.0, 379.0, 278.0, 301.0, 0.0,
        0.0, 82.0, 0.0, 4.0, NAN, NAN, 121.0, 234.0, 360.0, 262.0,
        120.0, 30.0, 11.0, 1.0, 7.0, 3.0, 31.0, 31.0, 355.0, 102.0,
        248.0, 274.0, 308.0, NAN, 5.0, 26.0, 11.0, 16.0, 6.0, 48.0,
        388.0, 539.0, 431.0, 272.0, 404.0, 186.0, 0.0, 2.0, 0.0, 4.0,
        1.0, 54.0, 272.0, 459.0, 235.0, 164.0, 365.0, 135.0, 2.0, NAN,
        NAN, 4.0, 0.0, 128.0, 210.0, 163.0, 446.0, 225.0, 462.0, 467.0,
        19.0, 13.0, 0.0, 3.0, 17.0, 132.0, 178.0, 338.0, 525.0, 623.0,
        145.0, 31.0, 19.0, 3.0, 0.0, 29.0, 25.0, 87.0, 259.0, 756.0,
        486.0, 180.0, 292.0, 43.0, 92.0, 1.0, 0.0, 16.0, 2.0, 0.0,
        130.0, 253.0, 594.0, 111.0, 273.0, 30.0, 0.0, 4.0, 0.0, 27.0,
        24.0, 41.0, 292.0, 378.0, 499.0, 265.0, 320.0, 227.0, 4.0, 0.0,
        4.0, 14.0, 8.0, 48.0, 416.0, 240.0, 404.0, 207.0, 733.0, 105.0,
        0.0, 112.0, 0.0, 14.0, 0.0, 30.0, 140.0, 202.0, 289.0, 159.0,
        424.0, 106.0, 3.0, 0.0, 65.0, 3.0, 14.0, 58.0, 268.0, 466.0,
        432.0, 266.0, 240.0, 95.0, 1.0, 0.0, 10.0, 26.0, 4.0, 114.0,
        94.0, 289.0, 173.0, 208.0, 263.0, 156.0, 5.0, 0.0, 16.0, 16.0,
        14.0, 0.0, 111.0, 475.0, 534.0, 432.0, 471.0, 117.0, 70.0, 1.0,
        3.0, 28.0, 7.0, 401.0, 184.0, 283.0, 338.0, 171.0, 335.0, 176.0,
        0.0, 0.0, 10.0, 11.0, 9.0, 140.0, 102.0, 208.0, 298.0, 245.0,
        220.0, 29.0, 2.0, 27.0, 10.0, 13.0, 26.0, 84.0, 143.0, 367.0,
        749.0, 563.0, 283.0, 353.0, 10.0, 0.0, 0.0, 0.0, 0.0, 9.0,
        246.0, 265.0, 343.0, 429.0, 168.0, 133.0, 17.0, 0.0, 18.0, 35.0,
        76.0, 158.0, 272.0, 250.0, 190.0, 289.0, 466.0, 84.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 22.0, 217.0, 299.0, 185.0, 115.0, 344.0, 203.0,
        8.0, NAN, NAN, 0.0, 5.0, 284.0, 123.0, 254.0, 476.0, 496.0,
        326.0, 27.0, 20.0, 0.0, 4.0, 53.0, 72.0, 113.0, 214.0, 364.0,
        219.0, 220.0, 156.0, 264.0, 0.0, 13.0, 0.0, 0.0, 45.0, 90.0,
        137.0, 638.0, 529.0, 261.0, 206.0, 251.0, 0.0, 0.0, 5.0, 9.0,
        58.0, 72.0, 138.0, 130.0, 471.0, 328.0, 356.0, 523.0, 0.0, 1.0,
        0.0, 0.0, 12.0, 143.0, 193.0, 184.0, 192.0, 138.0, 174.0, 69.0,
        1.0, 0.0, 0.0, 18.0, 25.0, 28.0, 92.0, 732.0, 320.0, 256.0,
        302.0, 131.0, 15.0, 0.0, 27.0, 0.0, 22.0, 20.0, 213.0, 393.0,
        474.0, 374.0, 109.0, 159.0, 0.0, 0.0, 0.0, 3.0, 3.0, 49.0,
        205.0, 128.0, 194.0, 570.0, 169.0, 89.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 26.0, 185.0, 286.0, 92.0, 225.0, 244.0, 190.0, 3.0, 20.0,
    ]
}

/// Expected results on [`reference_series`]
pub mod reference {
    pub const N_CLEAN: usize = 353;
    pub const CHANGE_POINT: usize = 298;
    pub const LOCATION: usize = 291;
    pub const MU1: f64 = 157.87285223367698;
    pub const MU2: f64 = 120.93548387096774;
    pub const PETTITT_U: f64 = 2716.0;
    pub const PETTITT_P: f64 = 0.7332886357063501;
    pub const SNHT_T: f64 = 2.4426594259172947;
    pub const BUISHAND_Q: f64 = 0.5955457285563376;
    pub const BUISHAND_R: f64 = 0.9893156056266303;
    pub const BUISHAND_V: f64 = 0.08330290132452312;
    pub const BUISHAND_U: f64 = 0.0644043126990563;
}

/// Normal series whose mean drops by `shift` after `split` observations
pub fn shifted_normal(n: usize, split: usize, shift: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();
    (0..n)
        .map(|i| {
            let level = if i < split { shift } else { 0.0 };
            level + noise.sample(&mut rng)
        })
        .collect()
}
