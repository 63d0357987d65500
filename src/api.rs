pub const API_HEROES: &str = "api/heroes";

pub fn api_hero(id: i32) -> String {
    format!("{API_HEROES}/{id}")
}
