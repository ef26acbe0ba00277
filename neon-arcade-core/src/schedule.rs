//! Tournament scheduling.
//!
//! Tournaments are grouped into Live/Upcoming/Past buckets by comparing
//! their bounds against a reference instant. The reference instant is always
//! "now at render time": buckets are rebuilt on every pass and never cached,
//! so a tournament crossing a boundary between two passes is reclassified.

use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};

use crate::game::Tournament;

/// The scheduling state of a tournament relative to a reference instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Live,
    Upcoming,
    Past,
}

impl Category {
    /// All categories in display order.
    #[inline]
    pub fn all() -> [Self; 3] {
        [Self::Live, Self::Upcoming, Self::Past]
    }

    /// Returns `true` if a tournament running from `start` to `end` belongs
    /// to `self` at the instant `now`.
    ///
    /// The three predicates are independent of each other. For a tournament
    /// with `start > end` more than one of them can hold at the same time;
    /// such a tournament shows up in every bucket whose predicate holds.
    pub fn matches(self, now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        match self {
            Self::Live => start <= now && end >= now,
            Self::Upcoming => start > now,
            Self::Past => end < now,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Live => "Live",
                Self::Upcoming => "Upcoming",
                Self::Past => "Past",
            }
        )
    }
}

/// Returns the category of a tournament at `now`.
///
/// The predicates are evaluated in the fixed order Live, Upcoming, Past and
/// the first match wins. At least one predicate holds for any pair of
/// bounds, inverted or not.
pub fn classify(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> Category {
    if Category::Live.matches(now, start, end) {
        Category::Live
    } else if Category::Upcoming.matches(now, start, end) {
        Category::Upcoming
    } else {
        // Not live and not upcoming implies `end < now`.
        Category::Past
    }
}

/// The tournaments of a single render pass, grouped by [`Category`].
///
/// Every bucket is an independent stable filter over the input slice: the
/// input order is preserved within each bucket and the input is never
/// mutated.
#[derive(Clone, Debug)]
pub struct Buckets<'a> {
    live: Vec<&'a Tournament>,
    upcoming: Vec<&'a Tournament>,
    past: Vec<&'a Tournament>,
}

impl<'a> Buckets<'a> {
    /// Groups `tournaments` by their category at `now`.
    pub fn new(tournaments: &'a [Tournament], now: DateTime<Utc>) -> Self {
        let filter = |category: Category| {
            tournaments
                .iter()
                .filter(|t| category.matches(now, t.start_time, t.end_time))
                .collect()
        };

        Self {
            live: filter(Category::Live),
            upcoming: filter(Category::Upcoming),
            past: filter(Category::Past),
        }
    }

    /// Returns the bucket for `category`.
    pub fn get(&self, category: Category) -> &[&'a Tournament] {
        match category {
            Category::Live => &self.live,
            Category::Upcoming => &self.upcoming,
            Category::Past => &self.past,
        }
    }
}

/// The tournament section of a game page: the full tournament list together
/// with the currently selected category.
#[derive(Clone, Debug)]
pub struct Schedule {
    tournaments: Vec<Tournament>,
    selected: Category,
}

impl Schedule {
    /// Creates a new `Schedule` with [`Category::Live`] selected.
    pub fn new(tournaments: Vec<Tournament>) -> Self {
        Self {
            tournaments,
            selected: Category::Live,
        }
    }

    #[inline]
    pub fn selected(&self) -> Category {
        self.selected
    }

    /// Selects `category`. Observable only through [`Schedule::visible`].
    pub fn select(&mut self, category: Category) {
        self.selected = category;
    }

    #[inline]
    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    /// Returns `true` if the schedule contains any tournament at all.
    ///
    /// This is evaluated against the full list, not the selected bucket: a
    /// category may show zero rows while this still returns `true`.
    pub fn has_any_tournaments(&self) -> bool {
        !self.tournaments.is_empty()
    }

    /// Returns the tournaments of the selected category at `now`.
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&Tournament> {
        Buckets::new(&self.tournaments, now).get(self.selected).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::{classify, Buckets, Category, Schedule};
    use crate::game::Tournament;

    fn instant(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn tournament(name: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Tournament {
        Tournament {
            name: name.to_owned(),
            prize: String::from("100 USDC"),
            start_time: start,
            end_time: end,
            link: None,
        }
    }

    #[test]
    fn test_classify() {
        let now = instant(2025, 6, 15);

        // Running across `now`.
        assert_eq!(
            classify(now, instant(2025, 6, 10), instant(2025, 6, 20)),
            Category::Live
        );
        // Starting exactly at `now` and ending exactly at `now` both count
        // as live.
        assert_eq!(classify(now, now, instant(2025, 6, 20)), Category::Live);
        assert_eq!(classify(now, instant(2025, 6, 10), now), Category::Live);

        assert_eq!(
            classify(now, instant(2025, 7, 1), instant(2025, 7, 2)),
            Category::Upcoming
        );
        assert_eq!(
            classify(now, instant(2025, 5, 1), instant(2025, 5, 2)),
            Category::Past
        );
    }

    #[test]
    fn test_predicates_mutually_exclusive_for_ordered_bounds() {
        let now = instant(2025, 6, 15);

        let bounds = [
            (instant(2025, 6, 10), instant(2025, 6, 20)),
            (instant(2025, 7, 1), instant(2025, 7, 2)),
            (instant(2025, 5, 1), instant(2025, 5, 2)),
            (now, now),
        ];

        for (start, end) in bounds {
            let matching = Category::all()
                .into_iter()
                .filter(|c| c.matches(now, start, end))
                .count();

            assert_eq!(matching, 1, "bounds {} - {}", start, end);
        }
    }

    #[test]
    fn test_inverted_bounds_match_twice() {
        // Starts in the future, ended in the past. Both the Upcoming and the
        // Past predicate hold; the Buckets keep both memberships.
        let now = instant(2025, 6, 15);
        let start = instant(2025, 7, 1);
        let end = instant(2025, 5, 1);

        assert!(!Category::Live.matches(now, start, end));
        assert!(Category::Upcoming.matches(now, start, end));
        assert!(Category::Past.matches(now, start, end));

        // `classify` resolves the ambiguity in fixed order.
        assert_eq!(classify(now, start, end), Category::Upcoming);

        let tournaments = vec![tournament("Inverted", start, end)];
        let buckets = Buckets::new(&tournaments, now);

        assert!(buckets.get(Category::Live).is_empty());
        assert_eq!(buckets.get(Category::Upcoming).len(), 1);
        assert_eq!(buckets.get(Category::Past).len(), 1);
    }

    #[test]
    fn test_buckets_preserve_input_order() {
        let now = instant(2025, 6, 15);

        let tournaments = vec![
            tournament("Past B", instant(2025, 5, 3), instant(2025, 5, 4)),
            tournament("Live A", instant(2025, 6, 10), instant(2025, 6, 20)),
            tournament("Past A", instant(2025, 5, 1), instant(2025, 5, 2)),
            tournament("Upcoming A", instant(2025, 7, 1), instant(2025, 7, 2)),
            tournament("Live B", instant(2025, 6, 14), instant(2025, 6, 16)),
        ];

        let buckets = Buckets::new(&tournaments, now);

        let names = |category: Category| -> Vec<&str> {
            buckets
                .get(category)
                .iter()
                .map(|t| t.name.as_str())
                .collect()
        };

        // Stable filters: relative input order survives, no sorting by date.
        assert_eq!(names(Category::Live), ["Live A", "Live B"]);
        assert_eq!(names(Category::Upcoming), ["Upcoming A"]);
        assert_eq!(names(Category::Past), ["Past B", "Past A"]);
    }

    #[test]
    fn test_cup_a_is_past() {
        let now = instant(2025, 1, 1);
        let tournaments = vec![tournament("Cup A", instant(2020, 1, 1), instant(2020, 1, 2))];

        let buckets = Buckets::new(&tournaments, now);

        assert!(buckets.get(Category::Live).is_empty());
        assert!(buckets.get(Category::Upcoming).is_empty());
        assert_eq!(buckets.get(Category::Past)[0].name, "Cup A");
    }

    #[test]
    fn test_empty_input() {
        let now = instant(2025, 1, 1);
        let buckets = Buckets::new(&[], now);

        for category in Category::all() {
            assert!(buckets.get(category).is_empty());
        }

        let schedule = Schedule::new(Vec::new());
        assert!(!schedule.has_any_tournaments());
        assert!(schedule.visible(now).is_empty());
    }

    #[test]
    fn test_schedule_selection() {
        let now = instant(2025, 6, 15);

        let tournaments = vec![
            tournament("Live A", instant(2025, 6, 10), instant(2025, 6, 20)),
            tournament("Upcoming A", instant(2025, 7, 1), instant(2025, 7, 2)),
            tournament("Past A", instant(2025, 5, 1), instant(2025, 5, 2)),
        ];

        let mut schedule = Schedule::new(tournaments);

        // Live is the initial selection.
        assert_eq!(schedule.selected(), Category::Live);
        assert_eq!(schedule.visible(now)[0].name, "Live A");

        schedule.select(Category::Past);
        assert_eq!(schedule.selected(), Category::Past);
        assert_eq!(schedule.visible(now)[0].name, "Past A");

        schedule.select(Category::Upcoming);
        assert_eq!(schedule.visible(now)[0].name, "Upcoming A");
    }

    #[test]
    fn test_has_any_tournaments_ignores_selection() {
        // Only a past tournament exists: the Live bucket is empty but the
        // schedule still reports content.
        let now = instant(2025, 6, 15);
        let tournaments = vec![tournament("Past A", instant(2025, 5, 1), instant(2025, 5, 2))];

        let schedule = Schedule::new(tournaments);

        assert!(schedule.has_any_tournaments());
        assert!(schedule.visible(now).is_empty());
    }

    #[test]
    fn test_reclassification_across_boundary() {
        let start = instant(2025, 6, 10);
        let end = instant(2025, 6, 20);
        let tournaments = vec![tournament("Cup", start, end)];

        let before = Buckets::new(&tournaments, instant(2025, 6, 5));
        assert_eq!(before.get(Category::Upcoming).len(), 1);

        let during = Buckets::new(&tournaments, instant(2025, 6, 15));
        assert_eq!(during.get(Category::Live).len(), 1);

        let after = Buckets::new(&tournaments, instant(2025, 6, 25));
        assert_eq!(after.get(Category::Past).len(), 1);
    }
}
