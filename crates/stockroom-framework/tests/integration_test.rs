use async_trait::async_trait;
use stockroom_framework::{ActorEntity, FrameworkError, LatencyBand, ResourceActor, ResourceClient};
use std::time::Duration;

// --- Test Entities ---

#[derive(Clone, Debug, PartialEq)]
struct Tray {
    id: u32,
    label: String,
    pieces: u32,
}

#[derive(Debug)]
struct TrayCreate {
    label: String,
    pieces: u32,
}

#[derive(Debug)]
struct TrayUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum TrayAction {
    Take(u32),
}

#[derive(Debug, thiserror::Error)]
enum TrayError {
    #[error("only {0} pieces left")]
    Short(u32),
}

#[async_trait]
impl ActorEntity for Tray {
    type Id = u32;
    type Create = TrayCreate;
    type Update = TrayUpdate;
    type Action = TrayAction;
    type ActionResult = u32;
    type Context = ();
    type Error = TrayError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: TrayCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            pieces: params.pieces,
        })
    }

    async fn on_update(&mut self, update: TrayUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TrayAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            TrayAction::Take(n) if n <= self.pieces => {
                self.pieces -= n;
                Ok(self.pieces)
            }
            TrayAction::Take(_) => Err(TrayError::Short(self.pieces)),
        }
    }
}

/// A slip referencing a tray; creation is refused when the tray does not exist.
#[derive(Clone, Debug, PartialEq)]
struct Slip {
    id: u32,
    tray: u32,
}

#[derive(Debug)]
struct SlipCreate {
    tray: u32,
}

#[derive(Debug)]
struct SlipUpdate;

#[derive(Debug)]
enum SlipAction {}

#[derive(Debug, thiserror::Error)]
enum SlipError {
    #[error("tray {0} not found")]
    UnknownTray(u32),
    #[error("tray lookup failed: {0}")]
    Lookup(String),
}

#[async_trait]
impl ActorEntity for Slip {
    type Id = u32;
    type Create = SlipCreate;
    type Update = SlipUpdate;
    type Action = SlipAction;
    type ActionResult = ();
    type Context = ResourceClient<Tray>;
    type Error = SlipError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: SlipCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            tray: params.tray,
        })
    }

    async fn on_create(&mut self, trays: &ResourceClient<Tray>) -> Result<(), Self::Error> {
        match trays.get(self.tray).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(SlipError::UnknownTray(self.tray)),
            Err(e) => Err(SlipError::Lookup(e.to_string())),
        }
    }

    async fn on_update(&mut self, _: SlipUpdate, _: &ResourceClient<Tray>) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SlipAction,
        _: &ResourceClient<Tray>,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create returns the stored record
    let tray: Tray = client
        .create(TrayCreate {
            label: "Chalk".into(),
            pieces: 4,
        })
        .await
        .unwrap();
    assert_eq!(tray.id, 1);

    // 2. Action succeeds while stock lasts
    let left = client.perform_action(tray.id, TrayAction::Take(3)).await.unwrap();
    assert_eq!(left, 1);

    // 3. Action failure carries the entity error
    let err = client
        .perform_action(tray.id, TrayAction::Take(2))
        .await
        .unwrap_err();
    let TrayError::Short(pieces) = err.downcast_entity::<TrayError>().unwrap();
    assert_eq!(pieces, 1);

    // 4. Update
    let updated = client
        .update(
            tray.id,
            TrayUpdate {
                label: Some("White chalk".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "White chalk");
    assert_eq!(updated.pieces, 1);

    // 5. Delete
    client.delete(tray.id).await.unwrap();
    assert!(client.get(tray.id).await.unwrap().is_none());
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_context_injection_validates_references() {
    let (tray_actor, trays) = ResourceActor::<Tray>::new(10);
    let (slip_actor, slips) = ResourceActor::<Slip>::new(10);

    let seed = vec![Tray {
        id: 8,
        label: "Markers".into(),
        pieces: 12,
    }];
    tokio::spawn(tray_actor.with_seed(seed).run(()));
    tokio::spawn(slip_actor.run(trays.clone()));

    let slip = slips.create(SlipCreate { tray: 8 }).await.unwrap();
    assert_eq!(slip.tray, 8);

    let err = slips.create(SlipCreate { tray: 99 }).await.unwrap_err();
    assert!(matches!(
        err.downcast_entity::<SlipError>(),
        Ok(SlipError::UnknownTray(99))
    ));

    // The refused create stored nothing.
    assert_eq!(slips.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Tray>::new(1);
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}

#[tokio::test(start_paused = true)]
async fn test_latency_delays_replies() {
    let (actor, client) = ResourceActor::<Tray>::new(10);
    let band = LatencyBand::from_millis(200, 200);
    tokio::spawn(actor.with_latency(band).run(()));

    let started = tokio::time::Instant::now();
    client.list().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(200));
}
