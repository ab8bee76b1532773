use crate::catalogue::Catalogue;
use crate::typename::TypeNameSimplifier;

/// Render the activity classes of a catalogue grouped by package
///
/// Produces one line per package, then for each public, concrete activity
/// class of that package an indented class line followed by its resolved
/// properties with simplified types:
///
/// ```text
/// Acme.Activities.dll
///     Acme.Activities.Click
///         Target (String)
///         Base::Timeout (Int32)
/// ```
///
/// Abstract or non-public activity classes are left out of the text and
/// logged at debug level.
pub fn render_catalogue_listing(catalogue: &Catalogue, simplifier: &TypeNameSimplifier) -> String {
    let mut output = String::new();

    for package_name in catalogue.package_names() {
        output.push_str(&format!("{}\n", package_name));

        for class in catalogue.select_by_package(package_name) {
            if !class.is_public() || class.is_abstract() {
                tracing::debug!(
                    class_name = class.simple_name(),
                    full_name = class.full_name(),
                    package_name = package_name,
                    is_public = class.is_public(),
                    is_abstract = class.is_abstract(),
                    super_class = class.super_class_full_name(),
                    "activity class not listed"
                );
                continue;
            }

            output.push_str(&format!("    {}\n", class.simple_name()));
            for property in catalogue.properties(class) {
                output.push_str(&format!(
                    "        {} ({})\n",
                    property.display_name,
                    simplifier.simplify(&property.type_full_name)
                ));
            }
        }
    }

    output
}
