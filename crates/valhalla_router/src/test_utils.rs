use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use futures::{FutureExt, future::BoxFuture};
use tokio::sync::mpsc;

use crate::{
    error::{RouteError, TransportError},
    route::Route,
    route_request::RouteRequest,
    transport::{Transport, TransportResponse},
};

pub const ROUTE_FIXTURE: &str = r#"{
  "trip": {
    "status": 0,
    "status_message": "Found route between points",
    "units": "kilometers",
    "language": "en-US",
    "locations": [
      { "type": "break", "lat": 40.659241, "lon": -73.983776 },
      { "type": "break", "lat": 40.671773, "lon": -73.981115 }
    ],
    "summary": { "length": 1.638, "time": 384 },
    "legs": [
      {
        "shape": "ahbbmAlxv~kCsAw@",
        "summary": { "length": 1.638, "time": 384 },
        "maneuvers": [
          {
            "type": 2,
            "instruction": "Walk south on 7th Avenue.",
            "street_names": ["7th Avenue"],
            "length": 0.8,
            "time": 180,
            "begin_shape_index": 0,
            "end_shape_index": 5
          },
          {
            "type": 10,
            "instruction": "Turn right onto 15th Street.",
            "street_names": ["15th Street"],
            "length": 0.838,
            "time": 204,
            "begin_shape_index": 5,
            "end_shape_index": 9
          },
          {
            "type": 4,
            "instruction": "You have arrived at your destination.",
            "length": 0.0,
            "time": 0,
            "begin_shape_index": 9,
            "end_shape_index": 9
          }
        ]
      }
    ]
  }
}"#;

pub enum ScriptedOutcome {
    Response(TransportResponse),
    Failure(std::io::ErrorKind),
    /// Never completes
    Pending,
}

/// Fake transport answering with pre-recorded outcomes, in order.
#[derive(Default, Clone)]
pub struct ScriptedTransport {
    outcomes: Arc<Mutex<VecDeque<ScriptedOutcome>>>,
    requests: Arc<Mutex<Vec<RouteRequest>>>,
}

impl ScriptedTransport {
    pub fn with_outcomes(outcomes: Vec<ScriptedOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into())),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<RouteRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn request_route(
        &self,
        request: RouteRequest,
    ) -> BoxFuture<'static, Result<TransportResponse, TransportError>> {
        self.requests.lock().unwrap().push(request);
        let outcome = self.outcomes.lock().unwrap().pop_front();

        async move {
            match outcome {
                Some(ScriptedOutcome::Response(response)) => Ok(response),
                Some(ScriptedOutcome::Failure(kind)) => {
                    Err(TransportError::Io(std::io::Error::new(kind, "scripted")))
                }
                Some(ScriptedOutcome::Pending) | None => {
                    futures::future::pending::<()>().await;
                    unreachable!()
                }
            }
        }
        .boxed()
    }
}

pub type Outcomes = mpsc::UnboundedReceiver<Result<Route, RouteError>>;

pub fn channel_callback() -> (mpsc::UnboundedSender<Result<Route, RouteError>>, Outcomes) {
    mpsc::unbounded_channel()
}
