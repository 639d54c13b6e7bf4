#[cfg(test)]
pub const FULL_CONFIG_DATA: &str = r##"[site]
website = "https://blog.example.org"
title = "Example Blog"
author = "Jo Example"
description = "Notes on software and photography."
language = "en-GB"

[general]
content_width = "42rem"
centered_layout = false
theme_toggle = false
post_list_dotted_divider = true
footer = true
fade_animation = false

[date]
date_format = "DD-MM-YYYY"
date_separator = "/"
date_on_right = false

[post]
reading_time = false
toc = false
image_viewer = false
copy_code = true
link_card = false

[log]
level = "Info"
log_to_console = true
"##;

#[cfg(test)]
pub const PARTIAL_CONFIG_DATA: &str = r##"[site]
title = "Example Blog"
"##;
