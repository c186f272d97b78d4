#[cfg(test)]
mod common;

#[cfg(test)]
mod route_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod report_tests;

#[cfg(test)]
mod login_page_tests;

#[cfg(test)]
mod page_render_tests;
