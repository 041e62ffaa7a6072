#[macro_export]
/// Declares the version constants of a release in the calling module.
///
/// The release triple and the plugin API version are written once, as
/// unsuffixed integer literals. Everything else is generated from them:
///
/// - `VERSION_MAJOR`, `VERSION_MINOR`, `VERSION_PATCH`: the triple as `u32`.
/// - `VERSION_STRING`: `"{major}.{minor}.{patch}"`, assembled with `concat!`
///   from the same literals, so it cannot disagree with the integers.
/// - `VERSION_CSTR`: the same string, NUL-terminated, for C consumers.
/// - `PLUGIN_API_VERSION`: the plugin API counter as `u32`.
/// - `VERSION_INFO`: all of the above as a [`VersionInfo`](crate::VersionInfo).
///
/// Negative, fractional or non-numeric literals are rejected at compile time
/// by the `u32` type of the generated constants.
///
/// ```
/// mod next {
///     wasmedge_version::declare_version! {
///         major: 0,
///         minor: 12,
///         patch: 0,
///         plugin_api: 2,
///     }
/// }
///
/// assert_eq!(next::VERSION_STRING, "0.12.0");
/// assert_eq!(next::VERSION_INFO.to_string(), next::VERSION_STRING);
/// ```
macro_rules! declare_version {
    (
        major: $major:literal,
        minor: $minor:literal,
        patch: $patch:literal,
        plugin_api: $plugin_api:literal $(,)?
    ) => {
        /// Major release number.
        pub const VERSION_MAJOR: u32 = $major;

        /// Minor release number.
        pub const VERSION_MINOR: u32 = $minor;

        /// Patch release number.
        pub const VERSION_PATCH: u32 = $patch;

        /// The release as `"{major}.{minor}.{patch}"`.
        pub const VERSION_STRING: &str = concat!($major, ".", $minor, ".", $patch);

        /// [`VERSION_STRING`] with a trailing NUL, for handing to C.
        pub const VERSION_CSTR: &::core::ffi::CStr = match ::core::ffi::CStr::from_bytes_with_nul(
            concat!($major, ".", $minor, ".", $patch, "\0").as_bytes(),
        ) {
            Ok(s) => s,
            Err(_) => panic!("version string contains an interior NUL"),
        };

        /// Version of the binary contract between the host and loaded plugins.
        ///
        /// Moves independently of the release triple.
        pub const PLUGIN_API_VERSION: u32 = $plugin_api;

        /// The version constants of this module, bundled.
        pub const VERSION_INFO: $crate::VersionInfo =
            $crate::VersionInfo::new(VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH, PLUGIN_API_VERSION);
    };
}
