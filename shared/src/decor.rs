//! Update rules for the purely decorative page counters. None of this feeds
//! back into game logic; the RNG is injected so the bands can be pinned in
//! tests.

use rand::Rng;

const SESSION_ID_CHARS: &[u8] = b"0123456789ABCDEF";
const TAG_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Starting value for the "spots left" urgency counter: 3..=7.
pub fn initial_spots_left<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(3..8)
}

/// Periodic update for "spots left": decrements with probability 0.3 and
/// resets into 2..=4 when it would drop below 1.
pub fn next_spots_left<R: Rng>(rng: &mut R, current: u32) -> u32 {
    if current <= 1 {
        rng.gen_range(2..5)
    } else if rng.gen_bool(0.3) {
        current - 1
    } else {
        current
    }
}

/// Fake "online now" figure: 1200..=1699.
pub fn initial_online_count<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1200..1700)
}

/// Random 8-char uppercase hex id for the "encrypted session" badge.
pub fn session_id<R: Rng>(rng: &mut R) -> String {
    (0..8)
        .map(|_| SESSION_ID_CHARS[rng.gen_range(0..SESSION_ID_CHARS.len())] as char)
        .collect()
}

/// Short visitor tag, e.g. "#K4ZQ", shown next to the reserve countdown and
/// in the live feed.
pub fn visitor_tag<R: Rng>(rng: &mut R) -> String {
    let tag: String = (0..4)
        .map(|_| TAG_CHARS[rng.gen_range(0..TAG_CHARS.len())] as char)
        .collect();
    format!("#{tag}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spots_left_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut spots = initial_spots_left(&mut rng);
        assert!((3..=7).contains(&spots));
        for _ in 0..1000 {
            spots = next_spots_left(&mut rng, spots);
            assert!((1..=7).contains(&spots), "spots drifted out of band: {spots}");
        }
    }

    #[test]
    fn test_spots_left_resets_from_floor() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let next = next_spots_left(&mut rng, 1);
            assert!((2..=4).contains(&next));
        }
    }

    #[test]
    fn test_online_count_band() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let online = initial_online_count(&mut rng);
            assert!((1200..=1699).contains(&online));
        }
    }

    #[test]
    fn test_id_shapes() {
        let mut rng = StdRng::seed_from_u64(9);
        let id = session_id(&mut rng);
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_lowercase()));

        let tag = visitor_tag(&mut rng);
        assert_eq!(tag.len(), 5);
        assert!(tag.starts_with('#'));
    }
}
