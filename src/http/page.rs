//! HTML skeleton shared by directory listings and error pages.

use crate::config::ServerInfo;

/// Background colour of a directory listing page.
pub const LISTING_BGCOLOR: &str = "#99cc99";
/// Background colour of an error page.
pub const ERROR_BGCOLOR: &str = "#cc9999";

/// Everything up to and including the `<h4>` heading.
pub fn header(title: &str, bgcolor: &str) -> String {
    format!(
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">\n\
         <html>\n\
         \t<head>\n\
         \t\t<meta http-equiv=\"Content-type\" content=\"text/html;charset=UTF-8\">\n\
         \t\t<title>{title}</title>\n\
         \t</head>\n\
         \t<body bgcolor=\"{bgcolor}\">\n\
         \t\t<h4>{title}</h4>\n"
    )
}

/// Closing rule, server address link and end of document.
pub fn footer(server: &ServerInfo) -> String {
    format!(
        "\t\t<hr>\n\
         \t\t<address><a href=\"{}\">{}</a></address>\n\
         \t</body>\n\
         </html>\n",
        server.url, server.name
    )
}
