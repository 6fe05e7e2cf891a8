use anyhow::Result;

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let types = ["Movie", "Movie", "Movie", "TV Show", "TV Show"];
    let countries = [
        "United States",
        "United States",
        "United States",
        "India",
        "India",
        "United Kingdom",
        "Japan",
        "South Korea",
        "Spain",
        "France",
        "Canada",
        "Mexico",
        "Germany",
        "Australia",
    ];
    let ratings = [
        "TV-MA", "TV-MA", "TV-14", "TV-PG", "R", "PG-13", "PG", "TV-Y7", "G",
    ];
    let adjectives = ["Silent", "Crimson", "Endless", "Broken", "Golden", "Hidden"];
    let nouns = ["Harbor", "Garden", "Empire", "Road", "Summer", "Signal"];

    let output_path = "netflix_titles.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(["show_id", "type", "title", "country", "rating", "release_year"])?;

    let n_rows = 500;
    for i in 0..n_rows {
        // Years skew recent, like the real catalog.
        let year = 1960 + (62.0 * rng.next_f64().powf(0.35)) as i32;

        // Roughly 5% of country and rating cells are left blank so the
        // loader's null-fill path has something to do.
        let country = if rng.next_f64() < 0.05 {
            ""
        } else {
            *rng.pick(&countries)
        };
        let rating = if rng.next_f64() < 0.05 {
            ""
        } else {
            *rng.pick(&ratings)
        };

        let show_id = format!("s{}", i + 1);
        let title = format!("The {} {}", rng.pick(&adjectives), rng.pick(&nouns));
        let year = year.to_string();

        writer.write_record([
            show_id.as_str(),
            *rng.pick(&types),
            title.as_str(),
            country,
            rating,
            year.as_str(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {n_rows} titles to {output_path}");
    Ok(())
}
