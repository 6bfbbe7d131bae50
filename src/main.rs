//! Astro Drop entry point
//!
//! Headless demo runner: plays one session with a simple steering AI,
//! prints events, and records the result on the persisted leaderboard.
//! Usage: `astro-drop [seed] [data-dir]`

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use astro_drop::sim::{GameEvent, GameState, ObjectKind};
use astro_drop::{FileStore, HighScores, Session, Tuning};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let data_dir = args.next().unwrap_or_else(|| ".astro-drop".to_string());

    let mut store = FileStore::new(&data_dir);
    let tuning = Tuning::load(&store);
    let mut highscores = HighScores::load(&store);
    if let Some(best) = highscores.top_score() {
        println!("best score so far: {best}");
    }

    let mut session = Session::new(seed, tuning.clone());
    session.start();

    let frame = Duration::from_millis(tuning.motion_interval_ms);
    let mut last = Instant::now();
    let mut final_score = 0;

    'game: loop {
        std::thread::sleep(frame);
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_millis() as u64;
        last = now;

        if let Some(tap_x) = steer(session.state(), &tuning) {
            session.on_tap(tap_x);
        }

        for event in session.advance(elapsed_ms) {
            match event {
                GameEvent::Scored { points, .. } => {
                    println!("caught one (+{points}) -> {}", session.state().score);
                }
                GameEvent::Missed { .. } => {}
                GameEvent::GameOver { score } => {
                    final_score = score;
                    break 'game;
                }
            }
        }
    }

    let ticks = session.state().time_ticks;
    println!("game over: score {final_score} after {ticks} ticks");

    if let Some(rank) = highscores.add_score(final_score, ticks) {
        println!("new high score, rank {rank}");
        highscores.save(&mut store);
    }
}

/// Demo steering: dodge the most pressing hazard, otherwise chase the
/// lowest collectible. Returns the tap to make this frame, if any.
fn steer(state: &GameState, tuning: &Tuning) -> Option<f32> {
    let paddle = state.paddle.center(tuning);
    let half_span = (tuning.paddle_width + tuning.object_size) / 2.0;

    // A hazard close above the band and on a collision course takes priority
    let threat = state
        .objects
        .iter()
        .filter(|o| o.kind == ObjectKind::Hazard)
        .filter(|o| o.y + tuning.object_size > tuning.paddle_band_top() - 4.0 * tuning.fall_speed)
        .map(|o| o.center(tuning))
        .find(|c| (c.x - paddle.x).abs() < half_span);

    if let Some(hazard) = threat {
        // Step away from it
        return Some(if hazard.x < paddle.x {
            tuning.field_width - 1.0
        } else {
            0.0
        });
    }

    // Chase the collectible nearest to the paddle band
    let target = state
        .objects
        .iter()
        .filter(|o| o.kind == ObjectKind::Collectible)
        .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
        .map(|o| o.center(tuning))?;

    if (target.x - paddle.x).abs() < tuning.tap_step / 2.0 {
        None // Close enough, let it fall in
    } else if target.x < paddle.x {
        Some(0.0)
    } else {
        Some(tuning.field_width - 1.0)
    }
}
