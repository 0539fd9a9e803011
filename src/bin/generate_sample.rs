//! Writes a deterministic `sample_data.csv` for trying the app.
//!
//! The headers are deliberately messy; they get sanitized on load.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let regions = ["North", "South", "East", "West"];
    let products = [("Widget", 4.5), ("Gadget", 12.0), ("Sprocket", 7.25)];

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            " [Revenue (USD)] ",
            "units sold",
            "Region",
            "Product",
            "discounted",
            "order date",
        ])
        .expect("Failed to write header");

    let mut n_rows: u32 = 0;
    for region in &regions {
        for (product, price) in &products {
            for _ in 0..40 {
                let units = rng.gauss(120.0, 30.0).max(1.0).round() as i64;
                let revenue = units as f64 * price * (1.0 + rng.gauss(0.0, 0.05));
                let discounted = rng.next_f64() < 0.3;
                let date = format!("2024-{:02}-{:02}", 1 + n_rows % 12, 1 + n_rows % 28);

                writer
                    .write_record([
                        format!("{revenue:.2}"),
                        units.to_string(),
                        region.to_string(),
                        product.to_string(),
                        discounted.to_string(),
                        date,
                    ])
                    .expect("Failed to write record");
                n_rows += 1;
            }
        }
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {n_rows} rows to {output_path}");
}
