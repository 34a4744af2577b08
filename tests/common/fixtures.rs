//! Test fixtures - reusable deployer scripts and manifests.

/// Deployer that records each call in `receipts.txt` and prints a
/// deterministic identifier (`id-<name>`).
///
/// Touching a `fail-<name>` marker file in the project makes the next
/// deploy of that resource exit non-zero, which is how tests simulate a
/// partial failure.
pub const RECEIPT_DEPLOYER: &str = r#"#!/bin/sh
set -eu
name="$1"
shift
if [ -f "fail-${name}" ]; then
    echo "simulated failure for ${name}" >&2
    exit 3
fi
if [ "$#" -gt 0 ]; then
    echo "${name} $*" >> receipts.txt
else
    echo "${name}" >> receipts.txt
fi
echo "id-${name}"
"#;

/// Three-resource chain: network, then server (fed the network id),
/// then dns (fed the server id).
pub const THREE_RESOURCE_MANIFEST: &str = r#"version = 1

[deployer]
command = "./deploy.sh"

[[resource]]
name = "network"
args = ["10.0.0.0/16"]

[[resource]]
name = "server"
args = [{ ref = "network" }, "small"]

[[resource]]
name = "dns"
args = [{ ref = "server" }]
"#;
