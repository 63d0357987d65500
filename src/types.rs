use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: i32,
    pub name: String,
}

/// Payload for creating a hero. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Either a bare id or a whole hero, as accepted by delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroRef {
    Id(i32),
    Hero(Hero),
}

impl HeroRef {
    pub fn id(&self) -> i32 {
        match self {
            HeroRef::Id(id) => *id,
            HeroRef::Hero(hero) => hero.id,
        }
    }
}

impl From<i32> for HeroRef {
    fn from(id: i32) -> Self {
        HeroRef::Id(id)
    }
}

impl From<Hero> for HeroRef {
    fn from(hero: Hero) -> Self {
        HeroRef::Hero(hero)
    }
}

impl From<&Hero> for HeroRef {
    fn from(hero: &Hero) -> Self {
        HeroRef::Hero(hero.clone())
    }
}
