//! Process-wide read-only event catalog.

use crate::models::event::{Event, EventKind, Tier, TierGroup};

/// Read-only lookup over the festival's event list.
///
/// Built once at startup and shared via `Arc`; never mutated afterwards.
/// Keyed lookups exist by id and by name, and the grouped listing keeps the
/// display order (5 Star first).
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// The catalog shipped with this deployment.
    pub fn builtin() -> Self {
        use EventKind::{Group, Individual};
        use Tier::{FiveStar, FourStar, ThreeStar};

        let event = |id: u32, name: &str, tier: Tier, kind: EventKind, description: &str, capacity: u32| Event {
            id,
            name: name.to_string(),
            tier,
            kind,
            description: description.to_string(),
            capacity,
        };

        Self::new(vec![
            event(
                0,
                "Personality Hunt",
                FiveStar,
                Individual,
                "Showcase your confidence, communication, and charisma.",
                10,
            ),
            event(
                1,
                "Duologue",
                FiveStar,
                Group { team_size: 2 },
                "Perform an engaging dialogue with your partner.",
                10,
            ),
            event(
                2,
                "Solo Singing",
                FiveStar,
                Individual,
                "Sing your heart out and impress the judges with your vocal performance.",
                10,
            ),
            event(
                3,
                "Solo Dance",
                FiveStar,
                Individual,
                "Showcase your best moves and rhythm within a limited time frame.",
                10,
            ),
            event(
                4,
                "Ramp Walk",
                FiveStar,
                Individual,
                "Walk the ramp with confidence, style, and elegance while following the rules.",
                10,
            ),
            event(
                5,
                "BGMI",
                FourStar,
                Individual,
                "No teams, no backup just you, your skills, and the battleground in this solo BGMI showdown",
                20,
            ),
            event(
                6,
                "Murder Mystery",
                FourStar,
                Group { team_size: 2 },
                "Solve a thrilling murder case by analyzing clues and working as a team.",
                12,
            ),
            event(
                7,
                "Entertainment Quiz",
                FourStar,
                Group { team_size: 2 },
                "Test your knowledge in entertainment, movies, and pop culture.",
                10,
            ),
            event(
                8,
                "Air Crash",
                FourStar,
                Individual,
                "Step into a fictional air crash scenario and defend your character's survival story.",
                10,
            ),
            event(
                9,
                "Debate",
                FourStar,
                Individual,
                "Engage in a structured argument on current topics and showcase your debating skills.",
                10,
            ),
            event(
                10,
                "Crisis Management",
                FourStar,
                Group { team_size: 2 },
                "Present a professional solution to a crisis scenario through teamwork and strategy.",
                6,
            ),
            event(
                11,
                "Shark Tank",
                FourStar,
                Group { team_size: 2 },
                "Pitch your innovative business idea to potential investors in a competitive format.",
                10,
            ),
            event(
                12,
                "On-Spot Photography",
                ThreeStar,
                Individual,
                "Capture the perfect shot within the given time using your own camera or phone.",
                8,
            ),
            event(
                13,
                "Treasure Hunt",
                ThreeStar,
                Group { team_size: 3 },
                "Solve clues and race against time to uncover hidden treasures around the campus.",
                12,
            ),
            event(
                14,
                "Reel Making",
                ThreeStar,
                Individual,
                "Create an engaging and original short reel that captures creativity and relevance.",
                10,
            ),
            event(
                15,
                "Doodle Art",
                ThreeStar,
                Individual,
                "Express your creativity by creating a themed doodle using your own art supplies.",
                10,
            ),
            event(
                16,
                "Poster Making",
                ThreeStar,
                Individual,
                "Design a digital poster on a given theme using tools like Photoshop or Canva.",
                8,
            ),
        ])
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn by_id(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Exact-match lookup by event name.
    pub fn by_name(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.name == name)
    }

    /// Events grouped by tier, highest tier first.
    pub fn grouped_by_tier(&self) -> Vec<TierGroup> {
        Tier::DISPLAY_ORDER
            .iter()
            .map(|&tier| TierGroup {
                tier,
                events: self
                    .events
                    .iter()
                    .filter(|e| e.tier == tier)
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}
