use crate::api::{api_hero, API_HEROES};
use crate::core::{Request, Transport};
use crate::error::{Error, Result};
use crate::messages::MessageSink;
use crate::types::{Hero, HeroRef, NewHero};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// CRUD access to the heroes resource.
///
/// Every operation reports its outcome to the message sink and never fails:
/// transport or decode errors are logged and replaced by an empty result
/// (`Vec::new()` or `None`). A `None` therefore means either "not found" or
/// "request failed".
pub struct HeroService {
    transport: Arc<dyn Transport>,
    messages: Arc<dyn MessageSink>,
}

impl HeroService {
    pub fn new(transport: Arc<dyn Transport>, messages: Arc<dyn MessageSink>) -> Self {
        Self {
            transport,
            messages,
        }
    }

    pub async fn list_heroes(&self) -> Vec<Hero> {
        self.fetch::<Vec<Hero>>(Request::get(API_HEROES))
            .await
            .inspect(|_| self.log("fetched heroes"))
            .unwrap_or_else(handle_error(self.sink(), "listHeroes", Vec::new()))
    }

    pub async fn get_hero(&self, id: i32) -> Option<Hero> {
        self.fetch::<Hero>(Request::get(api_hero(id)))
            .await
            .inspect(|_| self.log(format!("fetched hero id={id}")))
            .map(Some)
            .unwrap_or_else(handle_error(self.sink(), &format!("getHero id={id}"), None))
    }

    /// Replaces the hero with the same id. The server's reply is passed through untouched.
    pub async fn update_hero(&self, hero: &Hero) -> Option<Value> {
        let result = async {
            let body = serde_json::to_value(hero)?;
            self.transport.send(Request::put(API_HEROES, body)).await
        }
        .await;

        result
            .inspect(|_| self.log(format!("updated hero id={}", hero.id)))
            .map(Some)
            .unwrap_or_else(handle_error(self.sink(), "updateHero", None))
    }

    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        let result = async {
            let body = serde_json::to_value(hero)?;
            self.fetch::<Hero>(Request::post(API_HEROES, body)).await
        }
        .await;

        result
            .inspect(|created| self.log(format!("added hero with id={}", created.id)))
            .map(Some)
            .unwrap_or_else(handle_error(self.sink(), "addHero", None))
    }

    pub async fn delete_hero(&self, hero: impl Into<HeroRef>) -> Option<Value> {
        let id = hero.into().id();

        self.transport
            .send(Request::delete(api_hero(id)))
            .await
            .inspect(|_| self.log(format!("deleted hero id={id}")))
            .map(Some)
            .unwrap_or_else(handle_error(self.sink(), "deleteHero", None))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let body = self.transport.send(request).await?;
        Ok(serde_json::from_value(body)?)
    }

    fn log(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "hero service");
        self.messages.add(message);
    }

    fn sink(&self) -> &dyn MessageSink {
        self.messages.as_ref()
    }
}

/// Builds the failure handler shared by every operation: logs the error,
/// reports `"<operation> failed: <message>"` and yields `fallback`.
fn handle_error<'a, T: 'a>(
    messages: &'a dyn MessageSink,
    operation: &str,
    fallback: T,
) -> impl FnOnce(Error) -> T + 'a {
    let operation = operation.to_owned();
    move |error| {
        tracing::error!(%operation, ?error, "hero request failed");
        messages.add(format!("{operation} failed: {error}"));
        fallback
    }
}
