use crate::window::Window;

#[test]
fn test_window_moves() {
	let mut window = Window::new();
	assert!(window.is_empty());
	assert_eq!(window.physical(0), None);

	window.grow_back(4);
	window.grow_back(4);
	window.grow_back(4);
	window.shrink_front();
	assert_eq!((window.first(), window.last(), window.len()), (1, 3, 2));
	assert_eq!(window.physical(0), Some(1));
	assert_eq!(window.physical(1), Some(2));
	assert_eq!(window.physical(2), None);

	assert_eq!(window.rewind(), 1);
	assert_eq!((window.first(), window.last()), (0, 2));

	window.set_len(4, 4);
	assert_eq!(window.len(), 4);

	window.reset();
	assert_eq!(window, Window::default());
}

#[test]
#[should_panic(expected = "window overflows the buffer")]
fn test_window_grow_past_capacity() {
	let mut window = Window::new();
	window.grow_back(1);
	window.grow_back(1);
}

#[test]
#[should_panic(expected = "window overflows the buffer")]
fn test_window_set_len_past_capacity() {
	let mut window = Window::new();
	window.grow_back(2);
	window.shrink_front();
	window.set_len(2, 2);
}

#[test]
#[should_panic(expected = "window is empty")]
fn test_window_shrink_empty() {
	Window::new().shrink_back();
}
