use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::services::logging::Logger;

/// True when every region is mounted and none of them contains `target`.
///
/// An unmounted region means the pointer cannot be "outside" it, so nothing
/// fires while, for example, a dropdown is not rendered.
pub fn is_outside(regions: &[NodeRef], target: Option<&Node>) -> bool {
    outside_nodes(regions.iter().map(NodeRef::get), target)
}

fn outside_nodes(regions: impl IntoIterator<Item = Option<Node>>, target: Option<&Node>) -> bool {
    regions
        .into_iter()
        .all(|region| region.map_or(false, |node| !node.contains(target)))
}

/// Hook that reports `mousedown` events landing outside all `regions`.
///
/// The document listener lives exactly as long as the component is mounted.
/// `on_outside` should be stable across renders (e.g. from `use_callback`).
#[hook]
pub fn use_click_outside(regions: Vec<NodeRef>, on_outside: Callback<()>) {
    use_effect_with(on_outside, move |on_outside| {
        let on_outside = on_outside.clone();
        let listener = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| {
                EventListener::new(&document, "mousedown", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    if is_outside(&regions, target.as_ref()) {
                        on_outside.emit(());
                    }
                })
            });

        if listener.is_none() {
            Logger::warn_with_component("click-outside", "No document available, outside clicks are not tracked");
        }

        move || drop(listener)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_unmounted_region_is_never_outside() {
        let regions = vec![NodeRef::default(), NodeRef::default()];
        assert!(!is_outside(&regions, None));
    }

    #[wasm_bindgen_test]
    fn test_no_regions_is_outside() {
        assert!(is_outside(&[], None));
    }

    fn element(document: &web_sys::Document) -> Node {
        document.create_element("div").unwrap().into()
    }

    #[wasm_bindgen_test]
    fn test_mounted_regions_contain_their_children() {
        let document = web_sys::window().unwrap().document().unwrap();
        let search_box = element(&document);
        let dropdown = element(&document);
        let suggestion = element(&document);
        dropdown.append_child(&suggestion).unwrap();
        let regions = || [Some(search_box.clone()), Some(dropdown.clone())];

        assert!(!outside_nodes(regions(), Some(&search_box)));
        assert!(!outside_nodes(regions(), Some(&dropdown)));
        assert!(!outside_nodes(regions(), Some(&suggestion)));

        let elsewhere = element(&document);
        assert!(outside_nodes(regions(), Some(&elsewhere)));
    }

    #[wasm_bindgen_test]
    fn test_dropdown_not_rendered_blocks_outside_click() {
        let document = web_sys::window().unwrap().document().unwrap();
        let search_box = element(&document);
        let elsewhere = element(&document);

        assert!(!outside_nodes([Some(search_box), None], Some(&elsewhere)));
    }
}
