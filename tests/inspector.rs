use eframe_design::element::{FontFamily, FontStyle, FontWeight, TextAlign, factory};
use eframe_design::id_generator::ElementId;
use eframe_design::inspector::{
    InspectorEdit, InspectorError, InspectorView, MAX_FONT_SIZE, apply_edit, parse_font_size,
};
use eframe_design::scene::Scene;
use egui::{Color32, Pos2, Vec2};

fn selected_text() -> (Scene, ElementId) {
    let mut scene = Scene::new();
    let element = factory::create_text("Headline", Pos2::new(40.0, 40.0));
    let id = element.id();
    scene.add(element);
    (scene, id)
}

fn selected_shape() -> (Scene, ElementId) {
    let mut scene = Scene::new();
    let element = factory::create_shape("Box", Vec2::splat(100.0), Pos2::ZERO);
    let id = element.id();
    scene.add(element);
    (scene, id)
}

#[test]
fn test_no_selection_is_inert() {
    let mut scene = Scene::new();
    let element = factory::create_text("Untouched", Pos2::ZERO);
    scene.add(element);
    scene.select(None);
    let before = scene.elements().to_vec();

    assert_eq!(InspectorView::of(&scene), InspectorView::NoSelection);
    assert_eq!(
        apply_edit(&mut scene, InspectorEdit::Color(Color32::RED)),
        Err(InspectorError::NoSelection)
    );
    assert_eq!(
        apply_edit(&mut scene, InspectorEdit::Delete),
        Err(InspectorError::NoSelection)
    );
    assert_eq!(scene.elements(), before.as_slice());
}

#[test]
fn test_view_reflects_text_attributes() {
    let (scene, id) = selected_text();

    match InspectorView::of(&scene) {
        InspectorView::Element {
            id: view_id,
            element_type,
            text: Some(controls),
            ..
        } => {
            assert_eq!(view_id, id);
            assert_eq!(element_type, "text");
            assert_eq!(controls.font_size, 24);
            assert!(!controls.bold);
            assert!(controls.is_aligned(TextAlign::Left));
        }
        other => panic!("unexpected view {other:?}"),
    }
}

#[test]
fn test_color_targets_text_color_or_shape_background() {
    let (mut scene, text_id) = selected_text();
    apply_edit(&mut scene, InspectorEdit::Color(Color32::BLUE)).unwrap();
    assert_eq!(scene.get(text_id).unwrap().as_text().unwrap().color, Color32::BLUE);

    let (mut scene, shape_id) = selected_shape();
    apply_edit(&mut scene, InspectorEdit::Color(Color32::GREEN)).unwrap();
    assert_eq!(
        scene.get(shape_id).unwrap().as_shape().unwrap().background,
        Color32::GREEN
    );
}

#[test]
fn test_text_controls_rejected_for_shapes() {
    let (mut scene, id) = selected_shape();
    let before = scene.get(id).cloned();

    assert_eq!(
        apply_edit(&mut scene, InspectorEdit::ToggleBold),
        Err(InspectorError::NotApplicable {
            control: "Bold",
            kind: "shape"
        })
    );
    assert_eq!(scene.get(id).cloned(), before);
}

#[test]
fn test_font_size_input() {
    assert_eq!(parse_font_size("32"), Ok(32));
    assert_eq!(parse_font_size(" 18.6 "), Ok(19));
    assert_eq!(parse_font_size("5000"), Ok(MAX_FONT_SIZE));
    for bad in ["0", "-4", "0.2", "abc", "", "NaN", "inf"] {
        assert_eq!(
            parse_font_size(bad),
            Err(InspectorError::InvalidFontSize(bad.to_owned())),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_invalid_font_size_keeps_prior_value() {
    let (mut scene, id) = selected_text();
    apply_edit(&mut scene, InspectorEdit::FontSize("36".into())).unwrap();

    let result = apply_edit(&mut scene, InspectorEdit::FontSize("-2".into()));

    assert!(matches!(result, Err(InspectorError::InvalidFontSize(_))));
    assert_eq!(scene.get(id).unwrap().as_text().unwrap().font_size, 36.0);
}

#[test]
fn test_bold_toggle_flips_weight() {
    let (mut scene, id) = selected_text();
    let weight = |scene: &Scene| scene.get(id).unwrap().as_text().unwrap().weight;

    apply_edit(&mut scene, InspectorEdit::ToggleBold).unwrap();
    assert_eq!(weight(&scene), FontWeight::Bold);

    apply_edit(&mut scene, InspectorEdit::ToggleBold).unwrap();
    assert_eq!(weight(&scene), FontWeight::Normal);
}

#[test]
fn test_italic_toggle_flips_style() {
    let (mut scene, id) = selected_text();

    apply_edit(&mut scene, InspectorEdit::ToggleItalic).unwrap();
    assert_eq!(scene.get(id).unwrap().as_text().unwrap().style, FontStyle::Italic);

    apply_edit(&mut scene, InspectorEdit::ToggleItalic).unwrap();
    assert_eq!(scene.get(id).unwrap().as_text().unwrap().style, FontStyle::Normal);
}

#[test]
fn test_alignment_is_exclusive() {
    let (mut scene, _) = selected_text();

    for align in TextAlign::ALL {
        apply_edit(&mut scene, InspectorEdit::Align(align)).unwrap();
        let InspectorView::Element {
            text: Some(controls),
            ..
        } = InspectorView::of(&scene)
        else {
            panic!("text controls expected");
        };
        let active: Vec<TextAlign> = TextAlign::ALL
            .into_iter()
            .filter(|a| controls.is_aligned(*a))
            .collect();
        assert_eq!(active, vec![align]);
    }
}

#[test]
fn test_font_family_and_opacity() {
    let (mut scene, id) = selected_text();

    apply_edit(&mut scene, InspectorEdit::FontFamily(FontFamily::Lobster)).unwrap();
    apply_edit(&mut scene, InspectorEdit::Opacity(0.4)).unwrap();

    let element = scene.get(id).unwrap();
    assert_eq!(element.as_text().unwrap().font_family, FontFamily::Lobster);
    assert_eq!(element.opacity(), 0.4);
}

#[test]
fn test_delete_removes_selection() {
    let (mut scene, id) = selected_shape();

    apply_edit(&mut scene, InspectorEdit::Delete).unwrap();

    assert!(!scene.contains(id));
    assert_eq!(scene.selected_id(), None);
    assert_eq!(InspectorView::of(&scene), InspectorView::NoSelection);
}
