use csv::Writer;

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
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let factors: [(&str, &[&str]); 4] = [
        ("Migrationshintergrund", &["ja", "nein", "unbekannt"]),
        ("Geschlecht", &["weiblich", "maennlich", "divers"]),
        ("Sozialstatus", &["niedrig", "mittel", "hoch"]),
        ("Bildungsabschluss", &["keiner", "mittel", "hoch"]),
    ];
    let waves = 3;

    let output_path = "sample_data.csv";
    let mut writer = Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Faktor", "Gruppe", "Welle", "Value"])
        .expect("Failed to write header");

    let mut rows = 0u32;
    for (faktor, gruppen) in &factors {
        for gruppe in *gruppen {
            for welle in 1..=waves {
                // Self-efficacy readings cluster between 40% and 99%
                let pct = 40.0 + rng.next_f64() * 59.0;
                let welle = welle.to_string();
                let value = format!("{pct:.1}%");
                writer
                    .write_record([*faktor, *gruppe, welle.as_str(), value.as_str()])
                    .expect("Failed to write row");
                rows += 1;
            }
        }
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {rows} survey rows to {output_path}");
}
