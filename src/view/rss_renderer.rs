use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::post::PostItem;
use crate::text_utils::{format_rfc2822, permalink};

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
  <title>Vivian Green</title>
  <link>https://vivian-green.github.io</link>
  <description>Posts from Vivian Green</description>
  <language>en-us</language>
  <item>
    <title>Hello World</title>
    <link>https://vivian-green.github.io/#hello</link>
    <description>A subtitle</description>
    <pubDate>Mon, 15 Jan 2024 10:30:00 +0000</pubDate>
    <guid isPermaLink="true">https://vivian-green.github.io/#hello</guid>
  </item>
</channel>
</rss>
*/

pub struct RssChannel<'a> {
    pub ch_title: &'a str,
    pub ch_link: &'a str,
    pub ch_desc: &'a str,
    pub ch_language: &'a str,
    /// Prefix the post slug is appended to, e.g. `https://host/#`
    pub post_base_url: &'a str,
}

impl<'a> RssChannel<'a> {
    pub fn render(&self, items: &[PostItem]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        // <?xml version="1.0" encoding="UTF-8"?>
        let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
        writer.write_event(decl)?;

        // <rss version="2.0">
        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;

        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        push_text(&mut writer, "title", self.ch_title)?;
        push_text(&mut writer, "link", self.ch_link)?;
        push_text(&mut writer, "description", self.ch_desc)?;
        push_text(&mut writer, "language", self.ch_language)?;

        for item in items {
            let post = &item.post;
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            push_text(&mut writer, "title", post.title.as_str())?;

            // <link>https://vivian-green.github.io/#hello</link>
            let link = permalink(self.post_base_url, post.filename.as_str());
            push_text(&mut writer, "link", link.as_str())?;

            push_text(&mut writer, "description", post.summary())?;

            // <pubDate>Mon, 15 Jan 2024 10:30:00 +0000</pubDate>
            push_text(&mut writer, "pubDate", &format_rfc2822(&item.date))?;

            let mut guid_elem = BytesStart::new("guid");
            guid_elem.push_attribute(("isPermaLink", "true"));
            writer.write_event(Event::Start(guid_elem))?;
            writer.write_event(Event::Text(BytesText::new(link.as_str())))?;
            writer.write_event(Event::End(BytesEnd::new("guid")))?;

            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}

// BytesText::new escapes < > & ' and "
fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
