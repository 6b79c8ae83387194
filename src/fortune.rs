use crate::date::CalendarDate;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fortune {
    pub icon: &'static str,
    pub level: &'static str,
    pub description: &'static str,
    pub score: &'static str,
    pub activity: &'static str,
    pub colors: [&'static str; 3],
    pub numbers: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FortuneReading {
    pub date: CalendarDate,
    pub fortune: Fortune,
    pub quote: Quote,
    pub refreshed: bool,
}

pub const FORTUNES: [Fortune; 5] = [
    Fortune {
        icon: "🌟",
        level: "Excellent",
        description: "A day full of openings. Ideas come easily, so try something new and push yourself.",
        score: "95%",
        activity: "Learn to code",
        colors: ["#ff6b6b", "#4ecdc4", "#45b7d1"],
        numbers: [7, 3, 9],
    },
    Fortune {
        icon: "✨",
        level: "Good",
        description: "Good mood, high output. Clear the backlog and expect a pleasant surprise.",
        score: "85%",
        activity: "Tidy up code",
        colors: ["#a8e6cf", "#dcedc1", "#ffd3b6"],
        numbers: [2, 8, 5],
    },
    Fortune {
        icon: "💫",
        level: "Steady",
        description: "Keep a steady pace and work step by step. Rushing won't help today.",
        score: "75%",
        activity: "Refactor",
        colors: ["#ff9ff3", "#f368e0", "#ff6b6b"],
        numbers: [1, 6, 4],
    },
    Fortune {
        icon: "🌙",
        level: "Fair",
        description: "Small obstacles ahead. Stay patient and focused and they will sort themselves out.",
        score: "65%",
        activity: "Read the docs",
        colors: ["#54a0ff", "#5f27cd", "#00d2d3"],
        numbers: [3, 7, 2],
    },
    Fortune {
        icon: "🌈",
        level: "Rising",
        description: "A slow start that gets better as the day goes on. Keep a positive outlook.",
        score: "70%",
        activity: "Write tests",
        colors: ["#ff9ff3", "#54a0ff", "#5f27cd"],
        numbers: [8, 1, 5],
    },
];

pub const QUOTES: [Quote; 8] = [
    Quote {
        text: "Programming is an art, debugging is a science.",
        author: "Unknown programmer",
    },
    Quote {
        text: "Programs must be written for people to read, and only incidentally for machines to execute.",
        author: "Harold Abelson",
    },
    Quote {
        text: "The best code is no code at all.",
        author: "Jeff Atwood",
    },
    Quote {
        text: "Programming isn't about what you know; it's about what you can figure out.",
        author: "Chris Pine",
    },
    Quote {
        text: "Simplicity is the ultimate sophistication.",
        author: "Leonardo da Vinci",
    },
    Quote {
        text: "Success is the result of hard work, persistence, learning and sacrifice.",
        author: "A.P.J. Abdul Kalam",
    },
    Quote {
        text: "Every day is a new beginning, every hour a new chance.",
        author: "Unknown",
    },
    Quote {
        text: "Programming teaches you how to think.",
        author: "Steve Jobs",
    },
];

pub fn daily_indices(date: CalendarDate) -> (usize, usize) {
    let seed = date.digit_seed();
    (
        (seed % FORTUNES.len() as u64) as usize,
        (seed % QUOTES.len() as u64) as usize,
    )
}

/// The fortune for `date`; the same date always reads the same.
pub fn fortune_for(date: CalendarDate) -> FortuneReading {
    let (fortune, quote) = daily_indices(date);
    FortuneReading {
        date,
        fortune: FORTUNES[fortune].clone(),
        quote: QUOTES[quote].clone(),
        refreshed: false,
    }
}

/// A random draw for the refresh button. Nothing is stored.
pub fn random_fortune<R: Rng + ?Sized>(date: CalendarDate, rng: &mut R) -> FortuneReading {
    FortuneReading {
        date,
        fortune: FORTUNES[rng.gen_range(0..FORTUNES.len())].clone(),
        quote: QUOTES[rng.gen_range(0..QUOTES.len())].clone(),
        refreshed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_indexes_both_lists() {
        let date = CalendarDate::from_ymd(2024, 1, 15).unwrap();
        assert_eq!(daily_indices(date), (0, 3));

        let reading = fortune_for(date);
        assert_eq!(reading.fortune, FORTUNES[0]);
        assert_eq!(reading.quote, QUOTES[3]);
        assert!(!reading.refreshed);
    }

    #[test]
    fn same_date_same_fortune() {
        let date = CalendarDate::from_ymd(2025, 6, 30).unwrap();
        assert_eq!(fortune_for(date), fortune_for(date));
    }

    #[test]
    fn refresh_draws_from_the_lists() {
        let date = CalendarDate::from_ymd(2024, 1, 15).unwrap();
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let reading = random_fortune(date, &mut rng);
            assert!(reading.refreshed);
            assert!(FORTUNES.contains(&reading.fortune));
            assert!(QUOTES.contains(&reading.quote));
        }
        assert!(!fortune_for(date).refreshed);
    }
}
