//! API demo code samples.

use super::CodeExample;

/// Bullet list beside the code window.
pub static API_FEATURES: &[&str] = &[
    "RESTful API with OpenAPI spec",
    "SDKs for Node.js, Python, Go, Ruby",
    "Real-time webhooks for all events",
    "GraphQL support (beta)",
];

/// Raw HTTP request and response.
pub static CURL_EXAMPLE: CodeExample = CodeExample {
    language: "bash",
    filename: "terminal",
    code: r##"# Make an outbound call via TchaPBX API
curl -X POST https://api.tchapbx.io/v1/calls \
  -H "Authorization: Bearer YOUR_API_KEY" \
  -H "Content-Type: application/json" \
  -d '{
    "to": "+1234567890",
    "from": "+0987654321",
    "webhook_url": "https://your-app.com/call-events",
    "record": true,
    "transcribe": true,
    "timeout": 30
  }'

# Response
{
  "call_id": "call_abc123xyz",
  "status": "initiated",
  "direction": "outbound",
  "created_at": "2024-01-15T10:30:00Z"
}"##,
};

/// Node.js SDK sample.
pub static NODEJS_EXAMPLE: CodeExample = CodeExample {
    language: "javascript",
    filename: "app.js",
    code: r##"import TchaPBX from '@tchapbx/sdk';

// Initialize the client
const client = new TchaPBX({
  apiKey: process.env.TCHAPBX_API_KEY,
  region: 'us-east-1' // Nearest POP
});

// Make an outbound call
const call = await client.calls.create({
  to: '+1234567890',
  from: '+0987654321',
  webhookUrl: 'https://your-app.com/call-events',
  record: true,
  transcribe: true
});

console.log(`Call initiated: ${call.id}`);
// Output: Call initiated: call_abc123xyz

// Listen for real-time events
call.on('answered', (event) => {
  console.log('Call answered at:', event.timestamp);
});

call.on('ended', (event) => {
  console.log('Call duration:', event.duration, 'seconds');
  console.log('MOS Score:', event.quality.mos);
});"##,
};

/// Python SDK sample.
pub static PYTHON_EXAMPLE: CodeExample = CodeExample {
    language: "python",
    filename: "main.py",
    code: r##"from tchapbx import Client
import asyncio

# Initialize the client
client = Client(
    api_key="YOUR_API_KEY",
    region="us-east-1"  # Nearest POP
)

async def make_call():
    # Make an outbound call
    call = await client.calls.create(
        to="+1234567890",
        from_="+0987654321",
        webhook_url="https://your-app.com/call-events",
        record=True,
        transcribe=True
    )

    print(f"Call initiated: {call.id}")
    # Output: Call initiated: call_abc123xyz

    # Get call details
    details = await client.calls.get(call.id)
    print(f"Status: {details.status}")
    print(f"MOS Score: {details.quality.mos}")

    return call

# Get call logs with filtering
async def get_call_logs():
    logs = await client.calls.list(
        start_date="2024-01-01",
        end_date="2024-01-31",
        status="completed",
        limit=100
    )

    for log in logs:
        print(f"{log.id}: {log.duration}s, MOS: {log.mos}")

asyncio.run(make_call())"##,
};
