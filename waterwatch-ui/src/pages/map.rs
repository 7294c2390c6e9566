//! Map Page
//!
//! Leaflet map with a point marker and a zone-of-impact circle per water body.

use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use waterwatch::MapLayer;

use crate::components::{Card, CardContent, CardHeader};
use crate::leaflet;
use crate::state::GlobalState;

#[component]
pub fn RiskMap() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let layer = MapLayer::from_bodies(state.bodies(), &state.config.map);

    let container = create_node_ref::<html::Div>();
    let error = create_rw_signal(None::<String>);
    let map = Rc::new(MapSlot::<leaflet::Map>::default());

    // Leaflet measures its container, so wait until it is in the document
    let map_for_load = Rc::clone(&map);
    container.on_load(move |div| {
        request_animation_frame(move || {
            // The view was left before this frame
            if map_for_load.is_disposed() {
                return;
            }
            match leaflet::mount(&div, &layer) {
                Ok(instance) => {
                    instance.invalidate_size();
                    if let Some(orphan) = map_for_load.fill(instance) {
                        orphan.remove();
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to create map: {}", e).into());
                    error.set(Some(e));
                }
            }
        });
    });

    on_cleanup(move || {
        if let Some(instance) = map.dispose() {
            instance.remove();
        }
    });

    view! {
        <div class="container mx-auto mt-8 p-4">
            <Card>
                <CardHeader>
                    <h2 class="text-xl font-semibold">"Delhi Water Bodies Risk Map"</h2>
                </CardHeader>
                <CardContent>
                    {move || error.get().map(|e| view! {
                        <div class="mb-4 px-4 py-3 rounded bg-red-100 text-red-800 text-sm">
                            "Map unavailable: " {e}
                        </div>
                    })}
                    <div node_ref=container style="height: 500px; width: 100%" />
                </CardContent>
            </Card>
        </div>
    }
}

/// Holds the map instance between the deferred mount and unmount
struct MapSlot<T> {
    value: RefCell<Option<T>>,
    disposed: Cell<bool>,
}

impl<T> Default for MapSlot<T> {
    fn default() -> Self {
        Self {
            value: RefCell::new(None),
            disposed: Cell::new(false),
        }
    }
}

impl<T> MapSlot<T> {
    fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Store a mounted value; after disposal it is handed back to the caller
    fn fill(&self, value: T) -> Option<T> {
        if self.disposed.get() {
            return Some(value);
        }
        self.value.borrow_mut().replace(value)
    }

    /// Mark the slot dead and take whatever was mounted
    fn dispose(&self) -> Option<T> {
        self.disposed.set(true);
        self.value.borrow_mut().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispose_takes_mounted_value() {
        let slot = MapSlot::default();
        assert_eq!(slot.fill("map"), None);
        assert_eq!(slot.dispose(), Some("map"));
        assert_eq!(slot.dispose(), None);
    }

    #[test]
    fn test_mount_after_unmount_is_handed_back() {
        let slot = MapSlot::default();
        assert_eq!(slot.dispose(), None);
        assert!(slot.is_disposed());

        // A frame that still fires after unmount must release its own map
        assert_eq!(slot.fill("late map"), Some("late map"));
        assert_eq!(slot.dispose(), None);
    }
}
