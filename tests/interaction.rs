use eframe_design::element::factory;
use eframe_design::error::TransitionError;
use eframe_design::id_generator::ElementId;
use eframe_design::input::{CanvasTransform, InputEvent, InputLocation};
use eframe_design::interaction::{ElementState, InteractionController, InteractionState};
use eframe_design::library::CreationLibrary;
use eframe_design::scene::Scene;
use egui::{Key, Modifiers, Pos2, Vec2};

fn no_measure(_: ElementId) -> Option<Vec2> {
    None
}

fn scene_with_box(x: f32, y: f32) -> (Scene, ElementId) {
    let mut scene = Scene::new();
    let element = factory::create_shape("Box", Vec2::splat(100.0), Pos2::new(x, y));
    let id = element.id();
    scene.add(element);
    scene.select(None);
    (scene, id)
}

fn scene_with_text(content: &str) -> (Scene, ElementId) {
    let mut scene = Scene::new();
    let element = factory::create_text(content, Pos2::new(100.0, 100.0));
    let id = element.id();
    scene.add(element);
    scene.select(None);
    (scene, id)
}

fn at(x: f32, y: f32) -> InputLocation {
    InputLocation {
        position: Pos2::new(x, y),
        is_in_canvas: true,
    }
}

/// Press, release and double click at `pos`, leaving the text element in edit mode.
fn open_editor(controller: &mut InteractionController, scene: &mut Scene, pos: Pos2) {
    controller.pointer_down(scene, pos, true, no_measure);
    controller.pointer_up();
    controller.double_click(scene, pos, no_measure).unwrap();
}

#[test]
fn test_drag_moves_by_pointer_delta() {
    let (mut scene, id) = scene_with_box(100.0, 100.0);
    let mut controller = InteractionController::new();

    controller.pointer_down(&mut scene, Pos2::new(120.0, 130.0), true, no_measure);
    assert_eq!(controller.element_state(id), ElementState::Selected);
    assert_eq!(scene.selected_id(), Some(id));

    controller.pointer_move(&mut scene, Pos2::new(170.0, 110.0), true);
    assert_eq!(controller.element_state(id), ElementState::Dragging);
    assert_eq!(scene.get(id).unwrap().position(), Pos2::new(150.0, 80.0));

    controller.pointer_up();
    assert_eq!(controller.element_state(id), ElementState::Selected);
    assert_eq!(scene.get(id).unwrap().position(), Pos2::new(150.0, 80.0));
}

#[test]
fn test_repeated_moves_do_not_accumulate() {
    let (mut scene, id) = scene_with_box(0.0, 0.0);
    let mut controller = InteractionController::new();

    controller.pointer_down(&mut scene, Pos2::new(10.0, 10.0), true, no_measure);
    for _ in 0..10 {
        controller.pointer_move(&mut scene, Pos2::new(60.0, 40.0), true);
    }

    assert_eq!(scene.get(id).unwrap().position(), Pos2::new(50.0, 30.0));
}

#[test]
fn test_drag_through_screen_transform() {
    let (mut scene, id) = scene_with_box(100.0, 100.0);
    let mut controller = InteractionController::new();
    // Canvas drawn at half size with its corner at (200, 100) on screen
    let transform = CanvasTransform::new(Pos2::new(200.0, 100.0), 0.5);

    let events = [
        InputEvent::PointerDown {
            location: at(260.0, 165.0),
        },
        InputEvent::PointerMove {
            location: at(285.0, 155.0),
            button_held: true,
        },
        InputEvent::PointerUp {
            location: at(285.0, 155.0),
        },
    ];
    for event in &events {
        controller.handle_event(&mut scene, event, &transform, no_measure);
    }

    assert_eq!(scene.get(id).unwrap().position(), Pos2::new(150.0, 80.0));
    assert_eq!(controller.current_state_name(), "Selected");
}

#[test]
fn test_press_release_without_move_stays_selected() {
    let (mut scene, id) = scene_with_box(100.0, 100.0);
    let mut controller = InteractionController::new();

    controller.pointer_down(&mut scene, Pos2::new(150.0, 150.0), true, no_measure);
    controller.pointer_move(&mut scene, Pos2::new(150.0, 150.0), true);
    controller.pointer_up();

    assert_eq!(scene.get(id).unwrap().position(), Pos2::new(100.0, 100.0));
    assert_eq!(controller.element_state(id), ElementState::Selected);
    assert!(!controller.is_dragging());
}

#[test]
fn test_hover_without_button_does_not_drag() {
    let (mut scene, id) = scene_with_box(100.0, 100.0);
    let mut controller = InteractionController::new();

    controller.pointer_down(&mut scene, Pos2::new(150.0, 150.0), true, no_measure);
    controller.pointer_move(&mut scene, Pos2::new(180.0, 180.0), false);
    controller.pointer_move(&mut scene, Pos2::new(200.0, 200.0), true);

    assert_eq!(scene.get(id).unwrap().position(), Pos2::new(100.0, 100.0));
    assert_eq!(controller.element_state(id), ElementState::Selected);
}

#[test]
fn test_click_empty_space_clears_selection() {
    let (mut scene, id) = scene_with_box(100.0, 100.0);
    let mut controller = InteractionController::new();

    controller.pointer_down(&mut scene, Pos2::new(150.0, 150.0), true, no_measure);
    controller.pointer_up();
    controller.pointer_down(&mut scene, Pos2::new(500.0, 500.0), true, no_measure);

    assert_eq!(scene.selected_id(), None);
    assert_eq!(controller.element_state(id), ElementState::Idle);
    assert_eq!(controller.state(), &InteractionState::Idle);
}

#[test]
fn test_press_outside_canvas_counts_as_empty_space() {
    let (mut scene, _) = scene_with_box(0.0, 0.0);
    let mut controller = InteractionController::new();

    controller.pointer_down(&mut scene, Pos2::new(50.0, 50.0), true, no_measure);
    // Same canvas coordinates, but the press landed on the workspace margin
    controller.pointer_down(&mut scene, Pos2::new(50.0, 50.0), false, no_measure);

    assert_eq!(scene.selected_id(), None);
}

#[test]
fn test_top_most_element_wins() {
    let mut scene = Scene::new();
    let below = factory::create_shape("Box", Vec2::splat(100.0), Pos2::new(0.0, 0.0));
    let above = factory::create_shape("Box", Vec2::splat(100.0), Pos2::new(50.0, 50.0));
    let above_id = above.id();
    scene.add(below);
    scene.add(above);
    let mut controller = InteractionController::new();

    controller.pointer_down(&mut scene, Pos2::new(75.0, 75.0), true, no_measure);

    assert_eq!(scene.selected_id(), Some(above_id));
}

#[test]
fn test_edit_commit_on_focus_loss() {
    let (mut scene, id) = scene_with_text("Double click to edit");
    let mut controller = InteractionController::new();
    let pos = Pos2::new(110.0, 110.0);

    open_editor(&mut controller, &mut scene, pos);
    assert!(controller.is_editing());
    assert_eq!(controller.editing(), Some((id, "Double click to edit")));

    controller.set_edit_text("Summer Sale");
    // Nothing is written until the edit surface lets go
    assert_eq!(scene.get(id).unwrap().content(), "Double click to edit");

    controller.focus_lost(&mut scene);
    assert_eq!(scene.get(id).unwrap().content(), "Summer Sale");
    assert_eq!(controller.element_state(id), ElementState::Selected);
}

#[test]
fn test_empty_edit_is_committed() {
    let (mut scene, id) = scene_with_text("Remove me");
    let mut controller = InteractionController::new();

    open_editor(&mut controller, &mut scene, Pos2::new(110.0, 110.0));
    controller.set_edit_text("");
    controller.focus_lost(&mut scene);

    assert_eq!(scene.get(id).unwrap().content(), "");
}

#[test]
fn test_click_elsewhere_commits_edit() {
    let (mut scene, id) = scene_with_text("Draft");
    let mut controller = InteractionController::new();

    open_editor(&mut controller, &mut scene, Pos2::new(110.0, 110.0));
    if let Some(buffer) = controller.edit_buffer_mut() {
        buffer.push_str(" final");
    }
    controller.pointer_down(&mut scene, Pos2::new(700.0, 500.0), true, no_measure);

    assert_eq!(scene.get(id).unwrap().content(), "Draft final");
    assert!(!controller.is_editing());
    assert_eq!(scene.selected_id(), None);
}

#[test]
fn test_press_inside_editor_keeps_editing() {
    let (mut scene, id) = scene_with_text("Keep typing");
    let mut controller = InteractionController::new();

    open_editor(&mut controller, &mut scene, Pos2::new(110.0, 110.0));
    controller.pointer_down(&mut scene, Pos2::new(115.0, 112.0), true, no_measure);

    assert_eq!(controller.element_state(id), ElementState::EditingText);
}

#[test]
fn test_escape_commits_edit() {
    let (mut scene, id) = scene_with_text("Before");
    let mut controller = InteractionController::new();

    open_editor(&mut controller, &mut scene, Pos2::new(110.0, 110.0));
    controller.set_edit_text("After");
    controller.handle_event(
        &mut scene,
        &InputEvent::KeyDown {
            key: Key::Escape,
            modifiers: Modifiers::NONE,
        },
        &CanvasTransform::default(),
        no_measure,
    );

    assert_eq!(scene.get(id).unwrap().content(), "After");
    assert_eq!(controller.element_state(id), ElementState::Selected);
}

#[test]
fn test_double_click_requires_selection_and_text() {
    let (mut scene, id) = scene_with_box(100.0, 100.0);
    let mut controller = InteractionController::new();
    let pos = Pos2::new(150.0, 150.0);

    assert!(matches!(
        controller.double_click(&mut scene, pos, no_measure),
        Err(TransitionError::InvalidStateTransition { from: "Idle", .. })
    ));

    controller.pointer_down(&mut scene, pos, true, no_measure);
    controller.pointer_up();
    assert_eq!(
        controller.double_click(&mut scene, pos, no_measure),
        Err(TransitionError::NotText(id))
    );
    assert!(!controller.is_editing());
}

#[test]
fn test_delete_only_from_selected() {
    let (mut scene, id) = scene_with_box(100.0, 100.0);
    let mut controller = InteractionController::new();

    controller.pointer_down(&mut scene, Pos2::new(150.0, 150.0), true, no_measure);
    controller.pointer_move(&mut scene, Pos2::new(160.0, 150.0), true);
    assert!(!controller.can_delete());
    assert!(controller.delete_selected(&mut scene).is_err());
    assert!(scene.contains(id));

    controller.pointer_up();
    assert!(controller.can_delete());
    assert_eq!(controller.delete_selected(&mut scene), Ok(id));
    assert!(scene.is_empty());
    assert_eq!(scene.selected_id(), None);
    assert_eq!(controller.state(), &InteractionState::Idle);
}

#[test]
fn test_delete_refused_while_editing() {
    let (mut scene, id) = scene_with_text("Stay");
    let mut controller = InteractionController::new();

    open_editor(&mut controller, &mut scene, Pos2::new(110.0, 110.0));
    let delete = InputEvent::KeyDown {
        key: Key::Backspace,
        modifiers: Modifiers::NONE,
    };
    controller.handle_event(&mut scene, &delete, &CanvasTransform::default(), no_measure);

    assert!(scene.contains(id));
    assert!(controller.is_editing());
}

#[test]
fn test_delete_key_removes_selection() {
    let (mut scene, id) = scene_with_box(0.0, 0.0);
    let mut controller = InteractionController::new();
    controller.pointer_down(&mut scene, Pos2::new(10.0, 10.0), true, no_measure);
    controller.pointer_up();

    let delete = InputEvent::KeyDown {
        key: Key::Delete,
        modifiers: Modifiers::NONE,
    };
    controller.handle_event(&mut scene, &delete, &CanvasTransform::default(), no_measure);

    assert!(!scene.contains(id));
}

#[test]
fn test_drags_preserve_paint_order() {
    let mut scene = Scene::new();
    for i in 0..4 {
        let x = i as f32 * 150.0;
        scene.add(factory::create_shape("Box", Vec2::splat(100.0), Pos2::new(x, 0.0)));
    }
    let order = scene.ids();
    let mut controller = InteractionController::new();

    for (i, start) in [(1usize, 160.0), (3, 460.0), (0, 10.0)] {
        controller.pointer_down(&mut scene, Pos2::new(start, 50.0), true, no_measure);
        controller.pointer_move(&mut scene, Pos2::new(start + 37.0, 80.0), true);
        controller.pointer_move(&mut scene, Pos2::new(start - 12.0, 140.0), true);
        controller.pointer_up();
        assert_eq!(scene.selected_id(), Some(order[i]));
    }

    assert_eq!(scene.ids(), order);
}

#[test]
fn test_sync_follows_library_insertions() {
    let (mut scene, _) = scene_with_box(0.0, 0.0);
    let mut controller = InteractionController::new();
    let mut library = CreationLibrary::default();

    let added = library.add_shape_by_label(&mut scene, "Heart").unwrap();
    controller.sync(&mut scene);

    assert_eq!(controller.element_state(added), ElementState::Selected);
    assert!(controller.can_delete());
}

#[test]
fn test_sync_commits_edit_before_following_selection() {
    let (mut scene, text_id) = scene_with_text("Old");
    let mut controller = InteractionController::new();
    let mut library = CreationLibrary::default();

    open_editor(&mut controller, &mut scene, Pos2::new(110.0, 110.0));
    controller.set_edit_text("New");
    let added = library.add_shape_by_label(&mut scene, "Box").unwrap();
    controller.sync(&mut scene);

    assert_eq!(scene.get(text_id).unwrap().content(), "New");
    assert_eq!(controller.element_state(added), ElementState::Selected);
    assert_eq!(controller.element_state(text_id), ElementState::Idle);
}
