use ammonia;

/// Clean post HTML using the ammonia whitelist.
///
/// Safe formatting tags (<p>, <strong>, <em>, lists, links) survive; <script>
/// and <iframe> are dropped together with their content, as are event
/// handler attributes such as onclick.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}
