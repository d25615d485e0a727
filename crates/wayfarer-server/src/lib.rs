//! # wayfarer-server
//!
//! HTTP front end for the [`wayfarer`] library. Everything here is transport:
//! routing, request decoding, status codes and process lifecycle. Queries and
//! list mutations are delegated to [`wayfarer::api::WayfarerApi`].
//!
//! ## Endpoints
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | GET | `/api/destinations` | Every record |
//! | GET | `/api/destinations/{id}/details` | Display projection of one record |
//! | GET | `/api/destinations/{id}/coordinates` | `[{id, latitude, longitude}]` |
//! | GET | `/api/countries` | Distinct countries |
//! | GET | `/api/match?field=&pattern=&n=` | Ids whose field matches a regex |
//! | GET | `/api/lists` | The whole list document |
//! | POST | `/api/lists` | Create a list |
//! | PUT | `/api/lists/{listName}` | Replace a list's ids |
//! | DELETE | `/api/lists/{listName}` | Delete a list |
//! | POST | `/api/lists/{listName}/add` | Append one id |
//! | GET | `/api/lists/{listName}/destinations?sort=` | Details for a list's ids |

pub mod cli;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
