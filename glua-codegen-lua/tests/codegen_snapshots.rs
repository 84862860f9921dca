//! Snapshot tests for Lua code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use glua_codegen::testing::{
    ColumnExt, QueryExt, catalog, column, query, request, table, users_catalog, users_request,
};
use glua_codegen_lua::{PreviewFile, generate};
use glua_ir::GenerateRequest;
use serde_json::json;

fn generate_files(request: GenerateRequest) -> Vec<PreviewFile> {
    generate(request).expect("generation failed")
}

fn get_file<'a>(files: &'a [PreviewFile], path: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path == path)
        .map(|f| f.content.as_str())
        .unwrap_or_else(|| panic!("{path} not generated"))
}

fn posts_request() -> GenerateRequest {
    let posts = table(
        "posts",
        vec![
            column("id", "integer").not_null(),
            column("user_id", "integer").not_null(),
            column("body", "text"),
        ],
    );
    let list = query(
        "ListPostsByUsers",
        ":many",
        "SELECT id, user_id, body FROM posts WHERE user_id IN (/*SLICE:user_ids*/?)",
    )
    .file("posts.sql")
    .param(column("user_ids", "integer").not_null().slice())
    .columns(vec![
        column("id", "integer").not_null().from_table("posts"),
        column("user_id", "integer").not_null().from_table("posts"),
        column("body", "text").from_table("posts"),
    ]);
    let latest = query(
        "LatestPost",
        ":one",
        "SELECT id, user_id FROM posts ORDER BY id DESC LIMIT 1",
    )
    .file("posts.sql")
    .columns(vec![
        column("id", "integer").not_null().from_table("posts"),
        column("user_id", "integer").not_null().from_table("posts"),
    ]);

    request(
        Some(catalog(vec![posts])),
        vec![list, latest],
        json!({ "global_lua_table": "DB", "rename": { "user_id": "uid" } }),
    )
}

#[test]
fn test_users_queries() {
    let files = generate_files(users_request());

    insta::assert_snapshot!(get_file(&files, "users.sql.lua"), @r###"
-- Code generated by sqlc-gen-glua. DO NOT EDIT.
-- source: users.sql

local function repeatString(str, count)
    local result = {}
    for i = 1, count do
        result[i] = str
    end
    return table.concat(result, ",")
end

---@class GetUserParams
---@field id number

---@param params GetUserParams
---@return Users?
function DB.GetUser(params)
    local sql = [[SELECT id, name FROM users WHERE id = ?]]
    local args = { n = 1, params.id }
    local rows = DB._driver.query(sql, args)
    return rows[1]
end

---@class DeleteUserParams
---@field id number

---@param params DeleteUserParams
function DB.DeleteUser(params)
    local sql = [[DELETE FROM users WHERE id = ?]]
    local args = { n = 1, params.id }
    DB._driver.exec(sql, args)
end
"###);
}

#[test]
fn test_users_models() {
    let files = generate_files(users_request());

    insta::assert_snapshot!(get_file(&files, "models.lua"), @r###"
-- Code generated by sqlc-gen-glua. DO NOT EDIT.

---@class Users
---@field id number
---@field name string?
"###);
}

#[test]
fn test_dal_with_nested_table() {
    let mut request = users_request();
    request.settings.codegen.options = Some(json!({ "global_lua_table": "MyAddon.DB" }));
    let files = generate_files(request);

    insta::assert_snapshot!(get_file(&files, "dal.lua"), @r###"
-- Code generated by sqlc-gen-glua. DO NOT EDIT.

MyAddon = MyAddon or {}
MyAddon.DB = MyAddon.DB or {}

---@class glua.Driver
---@field query fun(sql: string, args: table): table[]
---@field exec fun(sql: string, args: table)

---@param driver glua.Driver
function MyAddon.DB.SetDriver(driver)
    MyAddon.DB._driver = driver
end

MyAddon.DB.Files = {
    "models.lua",
    "users.sql.lua",
}

---@param loader? fun(path: string)
function MyAddon.DB.Load(loader)
    loader = loader or include
    for _, file in ipairs(MyAddon.DB.Files) do
        loader(file)
    end
end

return MyAddon.DB
"###);
}

#[test]
fn test_renamed_rows_and_slices() {
    let files = generate_files(posts_request());

    insta::assert_snapshot!(get_file(&files, "posts.sql.lua"), @r###"
-- Code generated by sqlc-gen-glua. DO NOT EDIT.
-- source: posts.sql

local function repeatString(str, count)
    local result = {}
    for i = 1, count do
        result[i] = str
    end
    return table.concat(result, ",")
end

---@class ListPostsByUsersParams
---@field userIds number[]

---@param params ListPostsByUsersParams
---@return Posts[]
function DB.ListPostsByUsers(params)
    local sql = [[SELECT id, user_id, body FROM posts WHERE user_id IN (/*SLICE:user_ids*/?)]]
    local args = { n = 0 }
    sql = sql:gsub("/%*SLICE:user_ids%*/%?", repeatString("?", #params.userIds), 1)
    for _, value in ipairs(params.userIds) do
        args.n = args.n + 1
        args[args.n] = value
    end
    local rows = DB._driver.query(sql, args)
    local result = {}
    for i, row in ipairs(rows) do
        result[i] = { id = row.id, uid = row.user_id, body = row.body }
    end
    return result
end

---@class LatestPostResult
---@field id number
---@field uid number

---@return LatestPostResult?
function DB.LatestPost()
    local sql = [[SELECT id, user_id FROM posts ORDER BY id DESC LIMIT 1]]
    local args = { n = 0 }
    local rows = DB._driver.query(sql, args)
    local row = rows[1]
    if row == nil then
        return nil
    end
    return { id = row.id, uid = row.user_id }
end
"###);
}

#[test]
fn test_models_ignore_renames() {
    let files = generate_files(posts_request());

    insta::assert_snapshot!(get_file(&files, "models.lua"), @r###"
-- Code generated by sqlc-gen-glua. DO NOT EDIT.

---@class Posts
---@field id number
---@field userId number
---@field body string?
"###);
}

#[test]
fn test_synthesized_result_with_collections() {
    let tags = query(
        "ListTags",
        ":many",
        "SELECT name, aliases FROM tags_view WHERE name != ']]'",
    )
    .file("tags.sql")
    .columns(vec![
        column("name", "text").not_null(),
        column("aliases", "text").repeated(),
    ]);
    let files = generate_files(request(
        Some(users_catalog()),
        vec![tags],
        json!({ "global_lua_table": "DB" }),
    ));

    insta::assert_snapshot!(get_file(&files, "tags.sql.lua"), @r###"
-- Code generated by sqlc-gen-glua. DO NOT EDIT.
-- source: tags.sql

local function repeatString(str, count)
    local result = {}
    for i = 1, count do
        result[i] = str
    end
    return table.concat(result, ",")
end

---@class ListTagsResult
---@field name string
---@field aliases string[]?

---@return ListTagsResult[]
function DB.ListTags()
    local sql = [=[SELECT name, aliases FROM tags_view WHERE name != ']]']=]
    local args = { n = 0 }
    return DB._driver.query(sql, args)
end
"###);
}

#[test]
fn test_unsupported_type_names_the_query() {
    let bad = query("GetToken", ":one", "SELECT token FROM sessions")
        .file("sessions.sql")
        .columns(vec![column("token", "uuid").not_null()]);
    let err = generate(request(
        Some(users_catalog()),
        vec![bad],
        json!({ "global_lua_table": "DB" }),
    ))
    .unwrap_err();

    let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
    assert_eq!(
        chain,
        [
            "failed to synthesize binding for query 'GetToken'",
            "unsupported column type 'uuid'",
        ]
    );
}

#[test]
fn test_type_overrides_extend_the_registry() {
    let token = query("GetToken", ":one", "SELECT token FROM sessions")
        .file("sessions.sql")
        .columns(vec![column("token", "uuid").not_null()]);
    let files = generate_files(request(
        Some(users_catalog()),
        vec![token],
        json!({
            "global_lua_table": "DB",
            "overrides": [{ "db_type": "uuid", "lua_type": "string" }]
        }),
    ));

    assert!(get_file(&files, "sessions.sql.lua").contains("---@field token string\n"));
}

#[test]
fn test_missing_table_option_fails() {
    let mut request = users_request();
    request.settings.codegen.options = Some(json!({ "global_lua_table": "" }));

    let err = generate(request).unwrap_err();
    assert_eq!(err.to_string(), "global_lua_table option is required");
}

#[test]
fn test_missing_catalog_fails() {
    let mut request = users_request();
    request.catalog = None;

    let err = generate(request).unwrap_err();
    assert_eq!(err.to_string(), "generate request has no catalog");
}

#[test]
fn test_request_dump() {
    let files = generate_files(users_request());
    let dump: serde_json::Value = serde_json::from_str(get_file(&files, "request.json")).unwrap();

    assert_eq!(dump["sqlc_version"], "v1.27.0");
    assert_eq!(dump["queries"][0]["name"], "GetUser");
}
