use super::*;

#[test]
fn immediate_scroll_moves_the_offset() {
    let mut host = FakeViewport::new(320.0, 40.0);
    host.scroll_to_offset(88.0, false);
    assert_eq!(host.scroll_offset(), 88.0);
    assert_eq!(
        host.scroll_requests(),
        &[ScrollRequest {
            offset: 88.0,
            animated: false
        }]
    );
    assert!(!host.finish_animation());
}

#[test]
fn animated_scroll_waits_for_finish() {
    let mut host = FakeViewport::new(320.0, 40.0).with_offset(10.0);
    host.scroll_to_offset(200.0, true);
    assert_eq!(host.scroll_offset(), 10.0);
    assert!(host.finish_animation());
    assert_eq!(host.scroll_offset(), 200.0);
}

#[test]
fn attach_and_detach_are_recorded_in_order() {
    let mut host = FakeViewport::new(100.0, 20.0);
    let frame = Rect::new(0.0, 0.0, 44.0, 20.0);
    host.attach_view(ViewKey::Header(0), frame);
    host.attach_view(ViewKey::Footer(0), frame);
    host.detach_view(ViewKey::Header(0));

    assert_eq!(
        host.attached_keys(),
        vec![ViewKey::Header(0), ViewKey::Footer(0)]
    );
    assert_eq!(host.detached_keys(), vec![ViewKey::Header(0)]);
    assert!(!host.is_attached(ViewKey::Header(0)));
    assert_eq!(host.frame_of(ViewKey::Footer(0)), Some(frame));
    assert_eq!(host.live_count(), 1);

    assert_eq!(host.take_events().len(), 3);
    assert!(host.events().is_empty());
    assert_eq!(host.live_count(), 1);
}
